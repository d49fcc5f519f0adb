//! Horizontal alignment of a block's text.

use tinta_markup::TextAlign;

/// Offset used for `text-align: right`. It is a fixed value that ignores the
/// text width and the available width, so right-aligned text starts at the
/// canvas edge.
pub const RIGHT_ALIGN_OFFSET: f32 = 800.0;

/// Horizontal offset of text of width `text_width` inside a block of width
/// `available_width`, relative to the block's left edge.
///
/// | align  | offset                          |
/// |--------|---------------------------------|
/// | center | `(available - text) / 2`        |
/// | left   | `0`                             |
/// | right  | [`RIGHT_ALIGN_OFFSET`]          |
/// | other  | `available - text`              |
#[must_use]
pub fn horizontal_offset(align: TextAlign, available_width: f32, text_width: f32) -> f32 {
    match align {
        TextAlign::Center => (available_width - text_width) / 2.0,
        TextAlign::Left => 0.0,
        TextAlign::Right => RIGHT_ALIGN_OFFSET,
        TextAlign::Other => available_width - text_width,
    }
}
