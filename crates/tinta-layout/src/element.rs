//! Elements
//!
//! One [`Element`] is built per extracted tag. Its [`ElementKind`] decides two
//! things only: which font the text is set in and how the raw content becomes
//! display text. Everything else (colors, alignment, box geometry) is shared.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tinta_markup::style::COLOR;
use tinta_markup::{StyleMap, TagMatch, TagName, parse_style};

use crate::font::{HEADER_FONT_SIZE, INLINE_FONT_SIZE};
use crate::{FontFace, FontSpec};

/// Residual inline bold/italic markers left in content by the flat extractor.
static INLINE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?(b|i)>").expect("BUG: invalid INLINE_MARKER regex literal"));

/// Remove `<b>`, `</b>`, `<i>` and `</i>` from extracted content.
#[must_use]
pub fn strip_inline_markers(content: &str) -> String {
    INLINE_MARKER.replace_all(content, "").into_owned()
}

/// Font selection and text post-processing for one element variant.
pub trait TextPolicy {
    /// Font the element's text is set in.
    fn font(&self) -> FontSpec;

    /// Turn trimmed content into the text that is drawn.
    fn display_text(&self, content: &str) -> String;
}

/// Generic block: default font, `<br>` becomes a line break.
pub struct BaseText;

/// Bold run.
pub struct BoldText;

/// Italic run.
pub struct ItalicText;

/// Page header.
pub struct HeaderText;

/// Hyperlink.
pub struct LinkText;

impl TextPolicy for BaseText {
    fn font(&self) -> FontSpec {
        FontSpec::DEFAULT
    }

    fn display_text(&self, content: &str) -> String {
        content.replace("<br>", "\n")
    }
}

impl TextPolicy for BoldText {
    fn font(&self) -> FontSpec {
        FontSpec::new(FontFace::Bold, INLINE_FONT_SIZE)
    }

    fn display_text(&self, content: &str) -> String {
        BaseText
            .display_text(content)
            .replace("<b>", "")
            .replace("</b>", "")
    }
}

impl TextPolicy for ItalicText {
    fn font(&self) -> FontSpec {
        FontSpec::new(FontFace::Italic, INLINE_FONT_SIZE)
    }

    fn display_text(&self, content: &str) -> String {
        BaseText
            .display_text(content)
            .replace("<i>", "")
            .replace("</i>", "")
    }
}

impl TextPolicy for HeaderText {
    fn font(&self) -> FontSpec {
        FontSpec::new(FontFace::Bold, HEADER_FONT_SIZE)
    }

    fn display_text(&self, content: &str) -> String {
        BaseText.display_text(content)
    }
}

impl TextPolicy for LinkText {
    fn font(&self) -> FontSpec {
        BaseText.font()
    }

    fn display_text(&self, content: &str) -> String {
        BaseText
            .display_text(content)
            .replace("<a>", "")
            .replace("</a>", "")
    }
}

/// Element variant, chosen from the tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Any tag without a dedicated variant (`div`, `p`, `body`, `html`).
    Base,
    /// `<b>`
    Bold,
    /// `<i>`
    Italic,
    /// `<header>`
    Header,
    /// `<a>`
    Link,
}

/// Tag → variant. Tags missing here render as [`ElementKind::Base`], so the
/// structural tags still paint a visible box.
const TAG_DISPATCH: &[(TagName, ElementKind)] = &[
    (TagName::Header, ElementKind::Header),
    (TagName::A, ElementKind::Link),
    (TagName::B, ElementKind::Bold),
    (TagName::I, ElementKind::Italic),
];

impl ElementKind {
    /// Look up the variant for `tag`.
    #[must_use]
    pub fn for_tag(tag: TagName) -> Self {
        TAG_DISPATCH
            .iter()
            .find(|(t, _)| *t == tag)
            .map_or(Self::Base, |&(_, kind)| kind)
    }

    /// The font/text policy of this variant.
    #[must_use]
    pub fn policy(self) -> &'static dyn TextPolicy {
        match self {
            Self::Base => &BaseText,
            Self::Bold => &BoldText,
            Self::Italic => &ItalicText,
            Self::Header => &HeaderText,
            Self::Link => &LinkText,
        }
    }

    /// Declarations a variant imposes on its element's style. Links are
    /// always blue.
    pub fn apply_style_overrides(self, style: &mut StyleMap) {
        if self == Self::Link {
            style.set(COLOR, "blue");
        }
    }
}

/// One renderable block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag the element came from.
    pub tag: TagName,
    /// Variant selected for the tag.
    pub kind: ElementKind,
    /// Inline declarations, after variant overrides.
    pub style: StyleMap,
    /// Trimmed content.
    pub content: String,
}

impl Element {
    /// Build an element from its tag, raw style string and content.
    #[must_use]
    pub fn new(tag: TagName, style: &str, content: &str) -> Self {
        let kind = ElementKind::for_tag(tag);
        let mut style = parse_style(style);
        kind.apply_style_overrides(&mut style);
        Self {
            tag,
            kind,
            style,
            content: content.trim().to_string(),
        }
    }

    /// Build an element from an extracted tag, stripping residual inline
    /// bold/italic markers from its content first.
    #[must_use]
    pub fn from_match(tag_match: &TagMatch) -> Self {
        let content = strip_inline_markers(&tag_match.content);
        Self::new(tag_match.tag, &tag_match.style, &content)
    }

    /// Font of the element's text.
    #[must_use]
    pub fn font(&self) -> FontSpec {
        self.kind.policy().font()
    }

    /// Text to draw.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.kind.policy().display_text(&self.content)
    }
}

/// Build elements for every extracted tag, in order.
#[must_use]
pub fn build_elements(tags: &[TagMatch]) -> Vec<Element> {
    tags.iter().map(Element::from_match).collect()
}

/// Faces the given elements will draw with, each once.
#[must_use]
pub fn required_faces(elements: &[Element]) -> BTreeSet<FontFace> {
    elements.iter().map(|e| e.font().face).collect()
}
