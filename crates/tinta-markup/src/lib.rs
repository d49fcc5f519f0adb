//! Markup front end for the tinta renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag Extraction** - a flat, regex-driven scan for a fixed tag vocabulary
//!   (`div`, `p`, `header`, `body`, `html`, `a`, `i`, `b`)
//! - **Inline Styles** - `key: value;` parsing into a [`StyleMap`]
//! - **Colors** - hex and named color values
//!
//! # Not Implemented
//!
//! - A real HTML tokenizer or tree builder; nested blocks are not modeled
//! - Stylesheets, selectors, the cascade

/// Color values (hex and named).
pub mod color;
/// Regex-driven tag extraction.
pub mod extractor;
/// Inline `style` attribute parsing.
pub mod style;
/// The fixed tag vocabulary.
pub mod tag;

pub use color::ColorValue;
pub use extractor::{TagMatch, extract_tags};
pub use style::{StyleMap, TextAlign, parse_style};
pub use tag::TagName;

/// The sample page rendered when no markup is supplied.
pub const SAMPLE_MARKUP: &str = "
<html>
<body>
<header style='background-color: grey; text-align: center; color: white;'>Page Title</header>
<p style='background-color: lightblue; text-align: left; color: black;'>Welcome to our page!<br><br>Enjoy your stay.</p>
<div style='background-color: blue; text-align: center; color: white;'><i>Blue Box</i></div>
<a href='http://example.com' style=''>Visit Our Site</a>
</body>
</html>
";
