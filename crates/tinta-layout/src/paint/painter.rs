//! Painter - stacks elements vertically and emits drawing commands.

use log::debug;
use tinta_markup::TagMatch;

use super::{DisplayCommand, DisplayList};
use crate::element::build_elements;
use crate::{Element, TextMetrics, horizontal_offset};

/// Geometry of the block stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width every block spans, normally the canvas width.
    pub available_width: f32,
    /// Top edge of the first block.
    pub initial_cursor: f32,
    /// Vertical gap between consecutive blocks.
    pub block_gap: f32,
    /// Added to the text height to get a block's height.
    pub block_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            available_width: 800.0,
            initial_cursor: 10.0,
            block_gap: 10.0,
            block_padding: 20.0,
        }
    }
}

/// Result of painting a document.
#[derive(Debug, Clone)]
pub struct PaintedDocument {
    /// Elements in painting order.
    pub elements: Vec<Element>,
    /// Drawing commands for the renderer.
    pub display_list: DisplayList,
    /// Vertical cursor after the last block and its trailing gap.
    pub cursor: f32,
}

/// Painter that turns elements into a display list.
///
/// Blocks are stacked top to bottom in source order. The only state carried
/// from one block to the next is the vertical cursor.
pub struct Painter<'a, M: TextMetrics + ?Sized> {
    metrics: &'a M,
    config: LayoutConfig,
}

impl<'a, M: TextMetrics + ?Sized> Painter<'a, M> {
    /// Create a painter measuring text with `metrics`.
    #[must_use]
    pub const fn new(metrics: &'a M, config: LayoutConfig) -> Self {
        Self { metrics, config }
    }

    /// The geometry this painter stacks blocks with.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Build elements for `tags` and paint them.
    #[must_use]
    pub fn paint_document(&self, tags: &[TagMatch]) -> PaintedDocument {
        self.paint_elements(build_elements(tags))
    }

    /// Paint `elements` top to bottom starting at the initial cursor.
    ///
    /// Each block is painted at `(0, cursor)` across the full available
    /// width; the cursor then advances by the block height plus the gap.
    #[must_use]
    pub fn paint_elements(&self, elements: Vec<Element>) -> PaintedDocument {
        let mut display_list = DisplayList::new();
        let mut cursor = self.config.initial_cursor;

        for element in &elements {
            let height = self.paint_element(
                element,
                (0.0, cursor),
                self.config.available_width,
                &mut display_list,
            );
            debug!(
                "painted <{}> ({:?}) at y={cursor}, height {height}",
                element.tag, element.kind
            );
            cursor += height + self.config.block_gap;
        }

        PaintedDocument {
            elements,
            display_list,
            cursor,
        }
    }

    /// Paint one block with its top-left corner at `origin`.
    ///
    /// Pushes the background rectangle, spanning `available_width` and the
    /// text height plus padding, then the text at its aligned offset.
    /// Returns the block height.
    pub fn paint_element(
        &self,
        element: &Element,
        origin: (f32, f32),
        available_width: f32,
        display_list: &mut DisplayList,
    ) -> f32 {
        let (x, y) = origin;
        let font = element.font();
        let text = element.display_text();

        let extent = self.metrics.measure(&text, font);
        let offset = horizontal_offset(element.style.text_align(), available_width, extent.width);
        let height = extent.height + self.config.block_padding;

        display_list.push(DisplayCommand::FillRect {
            x,
            y,
            width: available_width,
            height,
            color: element.style.background_color(),
        });
        display_list.push(DisplayCommand::DrawText {
            x: x + offset,
            y,
            text,
            font,
            color: element.style.text_color(),
        });

        height
    }
}
