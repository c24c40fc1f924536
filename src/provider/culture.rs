use std::{str::FromStr, sync::LazyLock};

use derive_more::{Deref, Display};
use icu_locid::{LanguageIdentifier, ParserError};
use serde_with::DeserializeFromStr;
use thiserror::Error;

use super::NumberFormatInfo;

/// A language tag paired with the number rules of that locale.
#[derive(Clone, Debug, Deref, Display, Eq, PartialEq, Hash, DeserializeFromStr)]
#[display("{tag}")]
pub struct Culture {
    #[deref]
    tag: LanguageIdentifier,
    numbers: NumberFormatInfo,
}

#[derive(Debug, Error)]
pub enum CultureError {
    #[error(transparent)]
    InvalidLanguageTag(#[from] ParserError),
    #[error("No built-in number format exists for `{0}`")]
    UnsupportedLanguage(LanguageIdentifier),
}

impl Culture {
    /// Looks up the built-in number rules for a language tag.
    ///
    /// A region the table does not know falls back to the rules of its language.
    pub fn new(tag: LanguageIdentifier) -> Result<Self, CultureError> {
        match builtin_numbers(&tag) {
            Some(numbers) => Ok(Self { tag, numbers }),
            None => Err(CultureError::UnsupportedLanguage(tag)),
        }
    }

    /// Pairs any tag with caller-supplied number rules.
    #[must_use]
    pub const fn custom(tag: LanguageIdentifier, numbers: NumberFormatInfo) -> Self {
        Self { tag, numbers }
    }

    /// The culture-independent rules, tagged `und`.
    #[must_use]
    pub fn invariant() -> &'static Self {
        static INVARIANT: LazyLock<Culture> = LazyLock::new(|| Culture {
            tag: LanguageIdentifier::UND,
            numbers: NumberFormatInfo::default(),
        });

        &INVARIANT
    }

    #[must_use]
    pub const fn tag(&self) -> &LanguageIdentifier {
        &self.tag
    }

    #[must_use]
    pub const fn numbers(&self) -> &NumberFormatInfo {
        &self.numbers
    }

    #[must_use]
    pub fn is_invariant(&self) -> bool {
        self.tag == LanguageIdentifier::UND
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant().clone()
    }
}

impl FromStr for Culture {
    type Err = CultureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(LanguageIdentifier::from_str(s.trim())?)
    }
}

fn builtin_numbers(tag: &LanguageIdentifier) -> Option<NumberFormatInfo> {
    const NARROW_NO_BREAK_SPACE: &str = "\u{202F}";
    const NO_BREAK_SPACE: &str = "\u{A0}";
    const MINUS_SIGN: &str = "\u{2212}";

    let region = tag.region.as_ref().map(|region| region.as_str());
    let numbers = match (tag.language.as_str(), region) {
        ("de", Some("CH" | "LI")) => NumberFormatInfo::builder().group_separator("’").build(),
        ("es", Some("MX" | "US")) | ("und" | "en" | "ja" | "zh", _) => NumberFormatInfo::default(),
        ("de" | "es" | "it" | "nl" | "pt", _) => NumberFormatInfo::builder()
            .decimal_separator(",")
            .group_separator(".")
            .build(),
        ("fr", _) => NumberFormatInfo::builder()
            .decimal_separator(",")
            .group_separator(NARROW_NO_BREAK_SPACE)
            .build(),
        ("ru" | "pl", _) => NumberFormatInfo::builder()
            .decimal_separator(",")
            .group_separator(NO_BREAK_SPACE)
            .build(),
        ("sv", _) => NumberFormatInfo::builder()
            .decimal_separator(",")
            .group_separator(NO_BREAK_SPACE)
            .negative_sign(MINUS_SIGN)
            .negative_infinity_symbol(format!("{MINUS_SIGN}∞"))
            .positive_infinity_symbol("∞")
            .build(),
        _ => return None,
    };

    Some(numbers)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use icu_locid::langid;
    use rstest::rstest;

    use super::{Culture, CultureError};

    #[rstest]
    #[case::english("en-US", ".", ",")]
    #[case::german("de-DE", ",", ".")]
    #[case::swiss_german("de-CH", ".", "’")]
    #[case::french("fr-FR", ",", "\u{202F}")]
    #[case::brazilian("pt-BR", ",", ".")]
    #[case::mexican_spanish("es-MX", ".", ",")]
    #[case::unknown_region_falls_back("it-XX", ",", ".")]
    #[case::language_only("ru", ",", "\u{A0}")]
    fn builtin_separators(#[case] tag: &str, #[case] decimal: &str, #[case] group: &str) {
        let culture = Culture::from_str(tag).unwrap();
        assert_eq!(culture.numbers().decimal_separator(), decimal);
        assert_eq!(culture.numbers().group_separator(), group);
    }

    #[test]
    fn invariant_is_und() {
        let invariant = Culture::invariant();
        assert!(invariant.is_invariant());
        assert_eq!(invariant.to_string(), "und");
        assert_eq!(Culture::default(), *invariant);
    }

    #[test]
    fn parsed_und_is_invariant() {
        assert_eq!(Culture::from_str("und").unwrap(), *Culture::invariant());
    }

    #[test]
    fn unsupported_language() {
        assert!(matches!(
            Culture::from_str("tlh"),
            Err(CultureError::UnsupportedLanguage(tag)) if tag == langid!("tlh")
        ));
    }

    #[test]
    fn invalid_tag() {
        assert!(matches!(
            Culture::from_str("not a tag"),
            Err(CultureError::InvalidLanguageTag(_))
        ));
    }

    #[test]
    fn deref_to_language_identifier() {
        let culture = Culture::from_str("de-AT").unwrap();
        assert_eq!(culture.language.as_str(), "de");
        assert_eq!(culture.region.as_ref().map(|region| region.as_str()), Some("AT"));
    }

    #[test]
    fn deserialize_from_tag() {
        let culture = serde_json::from_str::<Culture>(r#""sv-SE""#).unwrap();
        assert_eq!(culture.numbers().negative_sign(), "\u{2212}");
        assert_eq!(culture.to_string(), "sv-SE");
    }
}
