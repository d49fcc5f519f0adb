//! Display List - a sequence of drawing commands
//!
//! Commands are stored in painting order (back to front): each block pushes
//! its background before its text.

use serde::Serialize;
use tinta_markup::ColorValue;

use crate::FontSpec;

/// A single drawing command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid color.
    ///
    /// Used for block backgrounds.
    FillRect {
        /// X coordinate of the rectangle's top-left corner.
        x: f32,
        /// Y coordinate of the rectangle's top-left corner.
        y: f32,
        /// Width of the rectangle in pixels.
        width: f32,
        /// Height of the rectangle in pixels.
        height: f32,
        /// Fill color.
        color: ColorValue,
    },

    /// Draw text with its first line's top edge at `y`.
    ///
    /// `\n` in `text` starts a new line one line height further down.
    DrawText {
        /// X coordinate of the text origin.
        x: f32,
        /// Y coordinate of the top of the first line.
        y: f32,
        /// The text content to draw.
        text: String,
        /// Face and size.
        font: FontSpec,
        /// Text color.
        color: ColorValue,
    },
}

/// A list of drawing commands in painting order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
