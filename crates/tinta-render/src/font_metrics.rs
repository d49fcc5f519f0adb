//! Font metrics backed by fontdue, so layout measures text exactly the way
//! the renderer draws it.

use fontdue::Font;
use tinta_layout::{ApproximateFontMetrics, FontSpec, TextMetrics};

use crate::fonts::FontBook;

/// Vertical metrics of a font at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LineMetrics {
    /// Distance from the top of a line to its baseline.
    pub ascent: f32,
    /// Ascent minus (negative) descent.
    pub glyph_height: f32,
    /// Baseline-to-baseline distance.
    pub line_height: f32,
}

/// Line metrics for `font` at `size`, using fontdue's horizontal line metrics
/// when the font provides them and 1 em / 1.2 em otherwise.
pub(crate) fn line_metrics(font: &Font, size: f32) -> LineMetrics {
    font.horizontal_line_metrics(size).map_or(
        LineMetrics {
            ascent: size,
            glyph_height: size,
            line_height: size * ApproximateFontMetrics::LINE_HEIGHT_RATIO,
        },
        |m| LineMetrics {
            ascent: m.ascent,
            glyph_height: m.ascent - m.descent,
            line_height: m.new_line_size,
        },
    )
}

/// Text metrics implementation backed by the fonts in a [`FontBook`].
///
/// Widths sum per-character advance widths, matching the cursor advancement
/// in `Renderer::draw_text`. `Font::metrics()` is used rather than
/// `Font::rasterize()` since no bitmap is needed.
///
/// A face missing from the book is measured with [`ApproximateFontMetrics`];
/// the renderer refuses to draw it anyway.
pub struct FontdueFontMetrics<'a> {
    fonts: &'a FontBook,
}

impl<'a> FontdueFontMetrics<'a> {
    /// Create a metrics provider over `fonts`.
    #[must_use]
    pub const fn new(fonts: &'a FontBook) -> Self {
        Self { fonts }
    }
}

impl TextMetrics for FontdueFontMetrics<'_> {
    fn text_width(&self, line: &str, font: FontSpec) -> f32 {
        let Some(face) = self.fonts.get(font.face) else {
            return ApproximateFontMetrics.text_width(line, font);
        };
        line.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| face.metrics(ch, font.size).advance_width)
            .sum()
    }

    fn line_height(&self, font: FontSpec) -> f32 {
        self.fonts.get(font.face).map_or_else(
            || ApproximateFontMetrics.line_height(font),
            |face| line_metrics(face, font.size).line_height,
        )
    }

    fn glyph_height(&self, font: FontSpec) -> f32 {
        self.fonts.get(font.face).map_or_else(
            || ApproximateFontMetrics.glyph_height(font),
            |face| line_metrics(face, font.size).glyph_height,
        )
    }
}
