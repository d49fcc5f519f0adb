//! Render pipeline for the tinta renderer.
//!
//! # Scope
//!
//! This crate provides:
//! - **Font Resolution** - strict per-face system font loading
//! - **Font Metrics** - fontdue-backed text measurement for layout
//! - **Software Rendering** - display list execution onto an RGB canvas
//! - **Pipeline** - markup in, PNG out
//!
//! ```text
//! markup → extract_tags → elements → fonts → Painter → Renderer → PNG
//! ```

/// Fontdue-backed text measurement.
pub mod font_metrics;
/// System font resolution.
pub mod fonts;
/// Display list execution.
pub mod renderer;

pub use tinta_layout as layout;
pub use tinta_markup as markup;

use std::path::{Path, PathBuf};

use image::RgbImage;
use log::info;
use thiserror::Error;
use tinta_common::warning::{clear_warnings, warn_once};
use tinta_layout::{
    FontFace, LayoutConfig, PaintedDocument, Painter, build_elements, required_faces,
};
use tinta_markup::extract_tags;

pub use font_metrics::FontdueFontMetrics;
pub use fonts::{FontBook, FontConfig, FontError};
pub use renderer::Renderer;
pub use tinta_markup::SAMPLE_MARKUP as DEFAULT_MARKUP;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "enhanced_rendered_website.png";

/// Error type for rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A font face the document needs could not be loaded.
    #[error(transparent)]
    Font(#[from] FontError),
    /// A text command named a face that was never loaded.
    #[error("no {0} font loaded")]
    MissingFace(FontFace),
    /// The image could not be written.
    #[error("failed to save image to '{}': {source}", .path.display())]
    Save {
        /// Output path.
        path: PathBuf,
        /// Underlying error.
        source: image::ImageError,
    },
}

/// Canvas size and fonts for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Canvas width in pixels; also the width every block spans.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font file overrides.
    pub fonts: FontConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fonts: FontConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Block geometry for this canvas.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            available_width: self.width as f32,
            ..LayoutConfig::default()
        }
    }
}

/// A rendered document.
pub struct RenderedPage {
    /// The canvas.
    pub image: RgbImage,
    /// Elements, display list and final cursor.
    pub document: PaintedDocument,
}

impl RenderedPage {
    /// Write the canvas as PNG (format chosen from the extension).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Save`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        self.image.save(path).map_err(|source| RenderError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Render `markup` onto a fresh canvas.
///
/// Only the font faces the document's elements use are loaded.
///
/// # Errors
///
/// Returns [`RenderError::Font`] when a needed face cannot be resolved.
pub fn render_markup(markup: &str, config: &RenderConfig) -> Result<RenderedPage, RenderError> {
    clear_warnings();
    let tags = extract_tags(markup);
    if tags.is_empty() {
        warn_once("render", "no renderable tags found in markup");
    }

    let elements = build_elements(&tags);
    let fonts = FontBook::load(&config.fonts, required_faces(&elements))?;
    let metrics = FontdueFontMetrics::new(&fonts);
    let document = Painter::new(&metrics, config.layout()).paint_elements(elements);

    let mut renderer = Renderer::new(config.width, config.height, &fonts);
    renderer.render(&document.display_list)?;

    info!(
        "rendered {} elements onto {}x{} canvas, cursor at {}",
        document.elements.len(),
        config.width,
        config.height,
        document.cursor
    );

    Ok(RenderedPage {
        image: renderer.into_image(),
        document,
    })
}

/// Render `markup` and save it to `path`.
///
/// # Errors
///
/// Returns any error from [`render_markup`] or [`RenderedPage::save`].
pub fn render_to_file(
    markup: &str,
    config: &RenderConfig,
    path: &Path,
) -> Result<RenderedPage, RenderError> {
    let page = render_markup(markup, config)?;
    page.save(path)?;
    info!("saved {}", path.display());
    Ok(page)
}
