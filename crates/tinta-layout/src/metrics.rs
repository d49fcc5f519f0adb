//! Text measurement
//!
//! Layout only needs three numbers per font: how wide a line is, how far apart
//! consecutive lines sit, and how tall one line of glyphs is. Real fonts
//! provide them in `tinta-render`; [`ApproximateFontMetrics`] stands in when
//! no font data is at hand.

use serde::Serialize;

use crate::FontSpec;

/// Measured size of a (possibly multi-line) text run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TextExtent {
    /// Width of the widest line.
    pub width: f32,
    /// Height from the top of the first line to the bottom of the last.
    pub height: f32,
}

/// Font measurements used by the painter.
pub trait TextMetrics {
    /// Advance width of a single line (no `\n`). Control characters have no
    /// width, matching the renderer, which skips them.
    fn text_width(&self, line: &str, font: FontSpec) -> f32;

    /// Distance between the tops of consecutive lines.
    fn line_height(&self, font: FontSpec) -> f32;

    /// Height of one line of glyphs, ascent to descent.
    fn glyph_height(&self, font: FontSpec) -> f32;

    /// Measure `text`, splitting on `\n`.
    ///
    /// Width is the widest line; height is `line_height × (lines − 1) +
    /// glyph_height`.
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, font: FontSpec) -> TextExtent {
        let mut width: f32 = 0.0;
        let mut lines = 0usize;
        for line in text.split('\n') {
            width = width.max(self.text_width(line, font));
            lines += 1;
        }
        let height = self
            .line_height(font)
            .mul_add((lines - 1) as f32, self.glyph_height(font));
        TextExtent { width, height }
    }
}

/// Approximate font metrics using fixed ratios.
///
/// Average Latin advance is taken as 0.6 em, line height as 1.2 em and glyph
/// height as 1 em. Used by `--layout` dumps and in tests.
pub struct ApproximateFontMetrics;

impl ApproximateFontMetrics {
    /// Advance width per character, in em.
    pub const CHAR_WIDTH_RATIO: f32 = 0.6;
    /// Line height, in em.
    pub const LINE_HEIGHT_RATIO: f32 = 1.2;
}

impl TextMetrics for ApproximateFontMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, line: &str, font: FontSpec) -> f32 {
        line.chars().filter(|ch| !ch.is_control()).count() as f32
            * font.size
            * Self::CHAR_WIDTH_RATIO
    }

    fn line_height(&self, font: FontSpec) -> f32 {
        font.size * Self::LINE_HEIGHT_RATIO
    }

    fn glyph_height(&self, font: FontSpec) -> f32 {
        font.size
    }
}
