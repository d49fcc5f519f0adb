//! Painting
//!
//! The painting phase converts elements into a display list of drawing
//! commands. The display list is then executed by a renderer, which knows
//! nothing about styles or elements.
//!
//! ```text
//! Elements → Painter → DisplayList → Renderer → Pixels
//! ```

mod display_list;
mod painter;

pub use display_list::{DisplayCommand, DisplayList};
pub use painter::{LayoutConfig, PaintedDocument, Painter};
