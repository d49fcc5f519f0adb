//! Tag extraction
//!
//! The extractor is deliberately not an HTML parser. It scans the markup for
//! opening tags of the fixed vocabulary, pairs each one with the first closing
//! tag of the same name, and keeps the pair when its content is a leaf (holds
//! no nested block tag). The result is flat and in document order.
//!
//! ```text
//! <html><body>                      container, skipped
//! <header style='...'>Page Title</header>   → TagMatch(header)
//! <div style='...'><i>Blue Box</i></div>    → TagMatch(div, "<i>Blue Box</i>")
//! ```
//!
//! Unbalanced or oddly nested markup yields zero or partial matches. That is
//! never an error.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::TagName;

/// Opening tag of the vocabulary, with its raw attribute text in group 2.
///
/// The name must be followed by whitespace or `>` so that `<br>` is not read
/// as `<b` and `<pre>` is not read as `<p`.
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(div|p|header|body|html|a|i|b)(\s[^>]*)?>")
        .expect("BUG: invalid OPEN_TAG regex literal")
});

/// Any opening or closing tag of the vocabulary.
static TAG_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?(div|p|header|body|html|a|i|b)(\s[^>]*)?>")
        .expect("BUG: invalid TAG_MARKER regex literal")
});

/// A `style='...'` or `style="..."` attribute.
static STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)style\s*=\s*(?:'([^']*)'|"([^"]*)")"#)
        .expect("BUG: invalid STYLE_ATTR regex literal")
});

/// One recognized open/close tag pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagMatch {
    /// Tag name of the pair.
    pub tag: TagName,
    /// Raw value of the `style` attribute, empty when absent.
    pub style: String,
    /// Untrimmed text between the opening and closing tag. May still hold
    /// inline markers such as `<i>` or `<br>`.
    pub content: String,
}

impl TagMatch {
    /// Create a tag match.
    #[must_use]
    pub fn new(tag: TagName, style: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag,
            style: style.into(),
            content: content.into(),
        }
    }
}

/// Extract all leaf tag pairs from `markup` in document order.
#[must_use]
pub fn extract_tags(markup: &str) -> Vec<TagMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(open) = OPEN_TAG.captures_at(markup, pos) {
        let (Some(whole), Some(name)) = (open.get(0), open.get(1)) else {
            break;
        };
        // The pattern only admits vocabulary names.
        let Ok(tag) = TagName::from_str(name.as_str()) else {
            pos = whole.end();
            continue;
        };

        let closing = format!("</{tag}>");
        let Some(close_offset) = markup[whole.end()..].find(&closing) else {
            // Unmatched opening tag: keep scanning, the inner tags may still pair.
            pos = whole.end();
            continue;
        };
        let content_end = whole.end() + close_offset;
        let content = &markup[whole.end()..content_end];

        if holds_block(content) {
            // Container of other blocks. Descend into it instead.
            pos = whole.end();
            continue;
        }

        let style = open
            .get(2)
            .map(|attrs| style_attribute(attrs.as_str()))
            .unwrap_or_default();

        matches.push(TagMatch::new(tag, style, content));
        pos = content_end + closing.len();
    }

    matches
}

/// True when `content` opens or closes a block tag.
fn holds_block(content: &str) -> bool {
    TAG_MARKER.captures_iter(content).any(|caps| {
        caps.get(1)
            .and_then(|name| TagName::from_str(name.as_str()).ok())
            .is_some_and(TagName::is_block)
    })
}

/// Pull the `style` attribute value out of an opening tag's attribute text.
fn style_attribute(attrs: &str) -> String {
    STYLE_ATTR
        .captures(attrs)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_attribute_quotes() {
        assert_eq!(style_attribute(" style='color: red;'"), "color: red;");
        assert_eq!(style_attribute(r#" style="color: red;""#), "color: red;");
        assert_eq!(style_attribute(" href='x' style=''"), "");
        assert_eq!(style_attribute(" href='x'"), "");
    }

    #[test]
    fn test_holds_block() {
        assert!(holds_block("<header>x</header>"));
        assert!(holds_block("text </p>"));
        assert!(!holds_block("<i>Blue Box</i>"));
        assert!(!holds_block("a<br>b <a href='x'>c</a>"));
    }

    #[test]
    fn test_data_style_is_not_style() {
        assert_eq!(style_attribute(" data-style='x' style='y'"), "y");
    }
}
