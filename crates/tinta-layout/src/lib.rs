//! Block layout and painting for the tinta renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Elements** - one renderable block per extracted tag, with a per-variant
//!   font and text policy (base, bold, italic, header, link)
//! - **Text Metrics** - the measuring seam between layout and real fonts
//! - **Alignment** - horizontal text offsets within a block
//! - **Painting** - naive vertical stacking into a [`DisplayList`]
//!
//! # Architecture
//!
//! ```text
//! TagMatch → Element → Painter → DisplayList → (tinta-render) pixels
//!                         ↑
//!                    TextMetrics
//! ```
//!
//! There is no wrapping, nesting or box model. Each block spans the full
//! available width and is as tall as its text plus fixed padding.

/// Horizontal alignment math.
pub mod align;
/// Elements and their font/text policies.
pub mod element;
/// Font faces and sizes.
pub mod font;
/// Text measurement.
pub mod metrics;
/// Display list and painter.
pub mod paint;

pub use align::horizontal_offset;
pub use element::{Element, ElementKind, TextPolicy, build_elements, required_faces};
pub use font::{FontFace, FontSpec};
pub use metrics::{ApproximateFontMetrics, TextExtent, TextMetrics};
pub use paint::{DisplayCommand, DisplayList, LayoutConfig, PaintedDocument, Painter};
pub use tinta_markup::TextAlign;
