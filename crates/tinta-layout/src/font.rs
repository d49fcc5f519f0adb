use serde::Serialize;

/// Size of the default font, in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 11.0;
/// Size of the inline bold and italic fonts, in pixels.
pub const INLINE_FONT_SIZE: f32 = 16.0;
/// Size of the header font, in pixels.
pub const HEADER_FONT_SIZE: f32 = 24.0;

/// A typeface the renderer must resolve. Faces never substitute for one
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    /// Upright, normal weight.
    Regular,
    /// Bold weight.
    Bold,
    /// Italic (or oblique) style.
    Italic,
}

impl FontFace {
    /// Lowercase label used in logs and errors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Bold => "bold",
            Self::Italic => "italic",
        }
    }
}

impl std::fmt::Display for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A face at a pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSpec {
    /// Typeface.
    pub face: FontFace,
    /// Size in pixels.
    pub size: f32,
}

impl FontSpec {
    /// The default font: regular face at [`DEFAULT_FONT_SIZE`].
    pub const DEFAULT: Self = Self::new(FontFace::Regular, DEFAULT_FONT_SIZE);

    /// Create a font spec.
    #[must_use]
    pub const fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }
}
