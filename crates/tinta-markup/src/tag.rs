use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// A tag name from the fixed vocabulary the extractor recognizes.
///
/// String forms are lowercase and matched case-sensitively, the same way the
/// extractor pattern is written.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TagName {
    /// `<div>`
    Div,
    /// `<p>`
    P,
    /// `<header>`
    Header,
    /// `<body>`
    Body,
    /// `<html>`
    Html,
    /// `<a>`
    A,
    /// `<i>`
    I,
    /// `<b>`
    B,
}

impl TagName {
    /// Block tags start their own box. Content holding one of these is a
    /// container rather than a leaf and is skipped by the extractor.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(
            self,
            Self::Div | Self::P | Self::Header | Self::Body | Self::Html
        )
    }

    /// The lowercase tag name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip_through_strum() {
        for tag in TagName::iter() {
            assert_eq!(TagName::from_str(tag.as_str()), Ok(tag));
            assert_eq!(tag.to_string(), tag.as_str());
        }
    }

    #[test]
    fn test_uppercase_is_not_recognized() {
        assert!(TagName::from_str("DIV").is_err());
        assert!(TagName::from_str("span").is_err());
    }

    #[test]
    fn test_block_classification() {
        let blocks: Vec<_> = TagName::iter().filter(|t| t.is_block()).collect();
        assert_eq!(
            blocks,
            vec![
                TagName::Div,
                TagName::P,
                TagName::Header,
                TagName::Body,
                TagName::Html
            ]
        );
    }
}
