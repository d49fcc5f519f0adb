//! Inline style parsing
//!
//! A `style` attribute is read as a flat list of `property: value` pairs
//! separated by `;`. There is no tokenizer, no cascade and no inheritance:
//! each element owns exactly the declarations written on its own tag.

use std::collections::HashMap;

use tinta_common::warning::warn_once;

use crate::ColorValue;

/// `background-color`
pub const BACKGROUND_COLOR: &str = "background-color";
/// `color`
pub const COLOR: &str = "color";
/// `text-align`
pub const TEXT_ALIGN: &str = "text-align";

/// Parsed inline declarations of one element, keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: HashMap<String, String>,
}

/// Parse a `key: value; key: value` string.
///
/// Segments without a `:` are dropped, keys and values are trimmed, and a
/// repeated key keeps its last value. Empty or malformed input yields an
/// empty map.
#[must_use]
pub fn parse_style(input: &str) -> StyleMap {
    let mut style = StyleMap::default();
    for segment in input.split(';') {
        if let Some((key, value)) = segment.split_once(':') {
            style.set(key.trim(), value.trim());
        }
    }
    style
}

impl StyleMap {
    /// Value of `property`, if declared.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    /// Declare `property`, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let _ = self.declarations.insert(property.into(), value.into());
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// True when nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over `(property, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `background-color`, white when absent or unresolvable.
    #[must_use]
    pub fn background_color(&self) -> ColorValue {
        self.color_or(BACKGROUND_COLOR, ColorValue::WHITE)
    }

    /// `color`, black when absent or unresolvable.
    #[must_use]
    pub fn text_color(&self) -> ColorValue {
        self.color_or(COLOR, ColorValue::BLACK)
    }

    /// `text-align`, [`TextAlign::Other`] when absent.
    #[must_use]
    pub fn text_align(&self) -> TextAlign {
        self.get(TEXT_ALIGN).map_or(TextAlign::Other, TextAlign::parse)
    }

    fn color_or(&self, property: &str, default: ColorValue) -> ColorValue {
        let Some(raw) = self.get(property) else {
            return default;
        };
        ColorValue::parse(raw).unwrap_or_else(|| {
            warn_once(
                "style",
                &format!("unknown color '{raw}' for '{property}', using default"),
            );
            default
        })
    }
}

/// Horizontal placement of a block's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `text-align: left`
    Left,
    /// `text-align: center`
    Center,
    /// `text-align: right`
    Right,
    /// Anything else, including no declaration at all.
    Other,
}

impl TextAlign {
    /// Classify a `text-align` value. Matching is exact after trimming.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "left" => Self::Left,
            "center" => Self::Center,
            "right" => Self::Right,
            _ => Self::Other,
        }
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}
