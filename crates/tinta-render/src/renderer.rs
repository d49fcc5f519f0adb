//! Software renderer.
//!
//! Executes a `DisplayList` onto an RGB pixel buffer using fontdue for text
//! rasterization.
//!
//! ```text
//! Elements → Paint → Render
//!              ↓        ↓
//!        DisplayList → Pixels
//! ```
//!
//! The renderer knows nothing about styles or elements. It simply executes
//! drawing commands.

use image::{Rgb, RgbImage};
use tinta_layout::{DisplayCommand, DisplayList, FontSpec};
use tinta_markup::ColorValue;

use crate::RenderError;
use crate::font_metrics::line_metrics;
use crate::fonts::FontBook;

/// Canvas background.
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Software renderer that executes a display list to a pixel buffer.
pub struct Renderer<'a> {
    /// RGB pixel buffer
    buffer: RgbImage,
    /// Fonts for `DrawText` commands
    fonts: &'a FontBook,
}

impl<'a> Renderer<'a> {
    /// Create a white canvas of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32, fonts: &'a FontBook) -> Self {
        Self {
            buffer: RgbImage::from_pixel(width, height, BACKGROUND),
            fonts,
        }
    }

    /// Execute a display list, drawing all commands to the pixel buffer in
    /// order (back to front).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingFace`] for text in a face that is not
    /// loaded. Commands before it have already been drawn.
    pub fn render(&mut self, display_list: &DisplayList) -> Result<(), RenderError> {
        for command in display_list.commands() {
            self.execute_command(command)?;
        }
        Ok(())
    }

    fn execute_command(&mut self, command: &DisplayCommand) -> Result<(), RenderError> {
        match command {
            DisplayCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                self.fill_rect(*x, *y, *width, *height, *color);
                Ok(())
            }
            DisplayCommand::DrawText {
                x,
                y,
                text,
                font,
                color,
            } => self.draw_text(text, *x, *y, *font, *color),
        }
    }

    /// Fill a rectangle, clipped to the canvas.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: ColorValue) {
        let (canvas_w, canvas_h) = self.buffer.dimensions();
        let x0 = (x.round() as i64).max(0);
        let y0 = (y.round() as i64).max(0);
        let x1 = ((x + width).round() as i64).min(i64::from(canvas_w));
        let y1 = ((y + height).round() as i64).min(i64::from(canvas_h));

        for py in y0..y1 {
            for px in x0..x1 {
                let bg = *self.buffer.get_pixel(px as u32, py as u32);
                self.buffer
                    .put_pixel(px as u32, py as u32, alpha_blend(color, bg, color.a));
            }
        }
    }

    /// Draw text with the top of its first line at `y`. Each `\n` moves down
    /// one line height and back to `x`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss
    )]
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font: FontSpec,
        color: ColorValue,
    ) -> Result<(), RenderError> {
        let fonts = self.fonts;
        let face = fonts
            .get(font.face)
            .ok_or(RenderError::MissingFace(font.face))?;
        let metrics = line_metrics(face, font.size);
        let (canvas_w, canvas_h) = self.buffer.dimensions();

        for (line_index, line) in text.split('\n').enumerate() {
            let baseline = metrics
                .line_height
                .mul_add(line_index as f32, y + metrics.ascent);
            let mut cursor_x = x;

            for ch in line.chars() {
                if ch.is_control() {
                    continue;
                }

                let (glyph, bitmap) = face.rasterize(ch, font.size);

                // fontdue's ymin is the bitmap's bottom edge relative to the
                // baseline, positive upwards.
                let glyph_x = cursor_x.round() as i64 + i64::from(glyph.xmin);
                let glyph_y =
                    baseline.round() as i64 - i64::from(glyph.ymin) - glyph.height as i64;

                for gy in 0..glyph.height {
                    for gx in 0..glyph.width {
                        let coverage = bitmap[gy * glyph.width + gx];
                        if coverage == 0 {
                            continue;
                        }
                        let px = glyph_x + gx as i64;
                        let py = glyph_y + gy as i64;
                        if px < 0 || py < 0 || px >= i64::from(canvas_w) || py >= i64::from(canvas_h)
                        {
                            continue;
                        }
                        let bg = *self.buffer.get_pixel(px as u32, py as u32);
                        let alpha = (u16::from(coverage) * u16::from(color.a) / 255) as u8;
                        self.buffer
                            .put_pixel(px as u32, py as u32, alpha_blend(color, bg, alpha));
                    }
                }

                cursor_x += glyph.advance_width;
            }
        }
        Ok(())
    }

    /// The pixel buffer drawn so far.
    #[must_use]
    pub const fn image(&self) -> &RgbImage {
        &self.buffer
    }

    /// Consume the renderer, returning the pixel buffer.
    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.buffer
    }
}

/// Alpha blend a foreground color onto a background pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_blend(fg: ColorValue, bg: Rgb<u8>, alpha: u8) -> Rgb<u8> {
    let a = f32::from(alpha) / 255.0;
    let inv_a = 1.0 - a;

    Rgb([
        f32::from(fg.r).mul_add(a, f32::from(bg[0]) * inv_a).round() as u8,
        f32::from(fg.g).mul_add(a, f32::from(bg[1]) * inv_a).round() as u8,
        f32::from(fg.b).mul_add(a, f32::from(bg[2]) * inv_a).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_blend_extremes() {
        let bg = Rgb([255, 255, 255]);
        assert_eq!(alpha_blend(ColorValue::BLACK, bg, 255), Rgb([0, 0, 0]));
        assert_eq!(alpha_blend(ColorValue::BLACK, bg, 0), bg);
    }

    #[test]
    fn test_alpha_blend_half() {
        let blended = alpha_blend(ColorValue::BLACK, Rgb([255, 255, 255]), 128);
        assert!(blended[0] > 120 && blended[0] < 135);
    }
}
