use compact_str::CompactString;
use derive_more::Display;
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum FormatError {
    #[error("Malformed format template at byte {position}: {reason}")]
    MalformedTemplate {
        position: usize,
        reason: TemplateErrorKind,
    },
    #[error("Format item {{{index}}} is out of range for {len} argument(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Format specifier `{specifier}` is not supported")]
    UnsupportedSpecifier { specifier: CompactString },
}

impl FormatError {
    pub(crate) const fn malformed(position: usize, reason: TemplateErrorKind) -> Self {
        Self::MalformedTemplate { position, reason }
    }

    pub(crate) fn unsupported<S: Into<CompactString>>(specifier: S) -> Self {
        Self::UnsupportedSpecifier {
            specifier: specifier.into(),
        }
    }
}

/// Why a template failed to parse.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum TemplateErrorKind {
    #[display("opening brace is never closed")]
    UnclosedItem,
    #[display("closing brace has no matching opening brace")]
    UnexpectedClosingBrace,
    #[display("format item has no index")]
    MissingIndex,
    #[display("format item index is too large")]
    IndexTooLarge,
    #[display("alignment is missing or too large")]
    InvalidAlignment,
    #[display("unexpected character in format item")]
    UnexpectedCharacter,
    #[display("opening brace inside a format string")]
    BraceInFormatString,
}

#[cfg(test)]
mod tests {
    use super::{FormatError, TemplateErrorKind};

    #[test]
    fn index_out_of_range_message() {
        let error = FormatError::IndexOutOfRange { index: 2, len: 2 };
        assert_eq!(
            error.to_string(),
            "Format item {2} is out of range for 2 argument(s)"
        );
    }

    #[test]
    fn malformed_message_includes_reason() {
        let error = FormatError::malformed(4, TemplateErrorKind::UnclosedItem);
        assert_eq!(
            error.to_string(),
            "Malformed format template at byte 4: opening brace is never closed"
        );
    }
}
