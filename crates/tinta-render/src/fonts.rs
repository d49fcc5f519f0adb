//! System font resolution.
//!
//! Each [`FontFace`] resolves to one font file, either an explicit path from
//! [`FontConfig`] or the first loadable entry of that face's search list. A
//! face that cannot be resolved is an error; bold and italic never fall back
//! to the regular face.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use log::{debug, info};
use thiserror::Error;
use tinta_layout::FontFace;

/// Common system font paths to search for the regular face.
const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// System font paths for the bold face.
const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// System font paths for the italic face.
const FONT_ITALIC_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Italic.ttf",
    "/Library/Fonts/Arial Italic.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Oblique.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Italic.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansOblique.ttf",
    // Windows
    "C:\\Windows\\Fonts\\ariali.ttf",
];

/// Built-in search list for `face`.
#[must_use]
pub const fn search_paths(face: FontFace) -> &'static [&'static str] {
    match face {
        FontFace::Regular => FONT_SEARCH_PATHS,
        FontFace::Bold => FONT_BOLD_SEARCH_PATHS,
        FontFace::Italic => FONT_ITALIC_SEARCH_PATHS,
    }
}

/// Error resolving a font face.
#[derive(Debug, Error)]
pub enum FontError {
    /// No search path held a loadable font.
    #[error("no {face} font found (searched: {})", .searched.join(", "))]
    NotFound {
        /// Face that was requested.
        face: FontFace,
        /// Every path that was tried.
        searched: Vec<String>,
    },
    /// An explicitly configured font file could not be read.
    #[error("failed to read {face} font '{}': {source}", .path.display())]
    Io {
        /// Face the file was configured for.
        face: FontFace,
        /// Configured path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// An explicitly configured font file is not a font fontdue can parse.
    #[error("failed to parse {face} font '{}': {message}", .path.display())]
    Parse {
        /// Face the file was configured for.
        face: FontFace,
        /// Configured path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Explicit font file per face. Faces left unset are searched for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontConfig {
    overrides: BTreeMap<FontFace, PathBuf>,
}

impl FontConfig {
    /// Use `path` for `face` instead of searching.
    #[must_use]
    pub fn with_font(mut self, face: FontFace, path: impl Into<PathBuf>) -> Self {
        let _ = self.overrides.insert(face, path.into());
        self
    }

    /// Explicit path configured for `face`, if any.
    #[must_use]
    pub fn path_for(&self, face: FontFace) -> Option<&Path> {
        self.overrides.get(&face).map(PathBuf::as_path)
    }
}

/// A parsed font and the file it came from.
pub struct LoadedFont {
    /// Parsed font.
    pub font: Font,
    /// Source file.
    pub path: PathBuf,
}

/// The fonts a document needs, keyed by face.
#[derive(Default)]
pub struct FontBook {
    fonts: HashMap<FontFace, LoadedFont>,
}

impl FontBook {
    /// A book with no faces loaded.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every face in `faces`.
    ///
    /// # Errors
    ///
    /// Returns the first face that cannot be resolved: [`FontError::Io`] or
    /// [`FontError::Parse`] for an explicit path, [`FontError::NotFound`] when
    /// no search path yields a font.
    pub fn load(
        config: &FontConfig,
        faces: impl IntoIterator<Item = FontFace>,
    ) -> Result<Self, FontError> {
        let mut book = Self::empty();
        for face in faces {
            let loaded = match config.path_for(face) {
                Some(path) => load_explicit(face, path)?,
                None => search(face)?,
            };
            info!("Loaded {face} font: {}", loaded.path.display());
            let _ = book.fonts.insert(face, loaded);
        }
        Ok(book)
    }

    /// The font for `face`, if loaded.
    #[must_use]
    pub fn get(&self, face: FontFace) -> Option<&Font> {
        self.fonts.get(&face).map(|loaded| &loaded.font)
    }

    /// The file `face` was loaded from, if loaded.
    #[must_use]
    pub fn path(&self, face: FontFace) -> Option<&Path> {
        self.fonts.get(&face).map(|loaded| loaded.path.as_path())
    }

    /// True when no face is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

fn parse_font(data: Vec<u8>) -> Result<Font, String> {
    Font::from_bytes(data, FontSettings::default()).map_err(str::to_string)
}

fn load_explicit(face: FontFace, path: &Path) -> Result<LoadedFont, FontError> {
    let data = fs::read(path).map_err(|source| FontError::Io {
        face,
        path: path.to_path_buf(),
        source,
    })?;
    let font = parse_font(data).map_err(|message| FontError::Parse {
        face,
        path: path.to_path_buf(),
        message,
    })?;
    Ok(LoadedFont {
        font,
        path: path.to_path_buf(),
    })
}

fn search(face: FontFace) -> Result<LoadedFont, FontError> {
    let paths = search_paths(face);
    for path in paths {
        let Ok(data) = fs::read(path) else {
            continue;
        };
        match parse_font(data) {
            Ok(font) => {
                return Ok(LoadedFont {
                    font,
                    path: PathBuf::from(path),
                });
            }
            Err(message) => debug!("skipping unparsable {face} font {path}: {message}"),
        }
    }
    Err(FontError::NotFound {
        face,
        searched: paths.iter().map(ToString::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_face_has_search_paths() {
        for face in [FontFace::Regular, FontFace::Bold, FontFace::Italic] {
            assert!(!search_paths(face).is_empty());
        }
    }

    #[test]
    fn test_faces_do_not_share_paths() {
        for path in FONT_BOLD_SEARCH_PATHS {
            assert!(!FONT_SEARCH_PATHS.contains(path));
            assert!(!FONT_ITALIC_SEARCH_PATHS.contains(path));
        }
    }

    #[test]
    fn test_loading_nothing_succeeds() {
        let book = FontBook::load(&FontConfig::default(), []).unwrap();
        assert!(book.is_empty());
    }
}
