//! Composite format templates: literal text with `{index[,alignment][:format]}` items.

pub(crate) mod number;

use crate::{
    argument::FormatArg,
    error::{FormatError, TemplateErrorKind},
    provider::FormatProvider,
};

/// Indices and alignments at or above this are rejected.
const MAX_ITEM_VALUE: usize = 1_000_000;

/// A piece of a parsed template.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Segment<'t> {
    Literal(&'t str),
    Item(Item<'t>),
}

/// A format item such as `{1,-8:N2}`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Item<'t> {
    pub index: usize,
    /// Positive right-aligns, negative left-aligns, zero leaves the text as is.
    pub alignment: isize,
    pub format: &'t str,
}

/// Splits a template into literal text and format items.
///
/// `{{` and `}}` yield a single literal brace. The iterator stops after the first error.
#[derive(Clone, Debug)]
pub struct Segments<'t> {
    template: &'t str,
    position: usize,
}

impl<'t> Segments<'t> {
    #[must_use]
    pub const fn new(template: &'t str) -> Self {
        Self {
            template,
            position: 0,
        }
    }

    fn fail(&mut self, position: usize, reason: TemplateErrorKind) -> FormatError {
        self.position = self.template.len();
        FormatError::malformed(position, reason)
    }

    /// Fails with `reason`, or as an unclosed item when the template ended at `cursor`.
    fn fail_at(&mut self, start: usize, cursor: usize, reason: TemplateErrorKind) -> FormatError {
        if cursor >= self.template.len() {
            self.fail(start, TemplateErrorKind::UnclosedItem)
        } else {
            self.fail(cursor, reason)
        }
    }

    fn parse_item(&mut self, start: usize) -> Result<Item<'t>, FormatError> {
        let template = self.template;
        let bytes = template.as_bytes();
        let mut cursor = start + 1;

        let index = match parse_digits(bytes, &mut cursor) {
            Digits::None => {
                return Err(self.fail_at(start, cursor, TemplateErrorKind::MissingIndex));
            }
            Digits::TooLarge => return Err(self.fail(cursor, TemplateErrorKind::IndexTooLarge)),
            Digits::Value(index) => index,
        };
        skip_spaces(bytes, &mut cursor);

        let mut alignment = 0;
        if bytes.get(cursor) == Some(&b',') {
            cursor += 1;
            skip_spaces(bytes, &mut cursor);
            let left = bytes.get(cursor) == Some(&b'-');
            if left {
                cursor += 1;
            }
            let Digits::Value(width) = parse_digits(bytes, &mut cursor) else {
                return Err(self.fail_at(start, cursor, TemplateErrorKind::InvalidAlignment));
            };
            // Bounded by MAX_ITEM_VALUE so it always fits
            let width = width as isize;
            alignment = if left { -width } else { width };
            skip_spaces(bytes, &mut cursor);
        }

        let mut format = "";
        if bytes.get(cursor) == Some(&b':') {
            cursor += 1;
            let format_start = cursor;
            loop {
                match bytes.get(cursor) {
                    Some(b'}') => break,
                    Some(b'{') => {
                        return Err(self.fail(cursor, TemplateErrorKind::BraceInFormatString));
                    }
                    Some(_) => cursor += 1,
                    None => return Err(self.fail(start, TemplateErrorKind::UnclosedItem)),
                }
            }
            format = &template[format_start..cursor];
        }

        if bytes.get(cursor) == Some(&b'}') {
            self.position = cursor + 1;
            Ok(Item {
                index,
                alignment,
                format,
            })
        } else {
            Err(self.fail_at(start, cursor, TemplateErrorKind::UnexpectedCharacter))
        }
    }
}

impl<'t> Iterator for Segments<'t> {
    type Item = Result<Segment<'t>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let template = self.template;
        let rest = &template[self.position..];
        if rest.is_empty() {
            return None;
        }

        let Some(offset) = rest.find(['{', '}']) else {
            self.position = template.len();
            return Some(Ok(Segment::Literal(rest)));
        };

        if offset > 0 {
            self.position += offset;
            return Some(Ok(Segment::Literal(&rest[..offset])));
        }

        let start = self.position;
        let bytes = rest.as_bytes();
        Some(match (bytes[0], bytes.get(1)) {
            (b'{', Some(b'{')) | (b'}', Some(b'}')) => {
                self.position += 2;
                Ok(Segment::Literal(&rest[..1]))
            }
            (b'{', _) => self.parse_item(start).map(Segment::Item),
            _ => Err(self.fail(start, TemplateErrorKind::UnexpectedClosingBrace)),
        })
    }
}

enum Digits {
    None,
    TooLarge,
    Value(usize),
}

fn parse_digits(bytes: &[u8], cursor: &mut usize) -> Digits {
    let start = *cursor;
    let mut value = 0_usize;
    while let Some(digit) = bytes.get(*cursor).filter(|byte| byte.is_ascii_digit()) {
        value = value * 10 + usize::from(digit - b'0');
        if value >= MAX_ITEM_VALUE {
            return Digits::TooLarge;
        }
        *cursor += 1;
    }

    if *cursor == start {
        Digits::None
    } else {
        Digits::Value(value)
    }
}

fn skip_spaces(bytes: &[u8], cursor: &mut usize) {
    while bytes.get(*cursor) == Some(&b' ') {
        *cursor += 1;
    }
}

/// Replaces every format item in `template` with the textual form of the argument it indexes.
///
/// # Errors
///
/// Returns [`FormatError::MalformedTemplate`] if the template cannot be parsed,
/// [`FormatError::IndexOutOfRange`] if an item indexes past the end of `args`, and any error an
/// argument returns while rendering.
pub fn format(
    provider: &dyn FormatProvider,
    template: &str,
    args: &[&dyn FormatArg],
) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + args.len() * 8);

    for segment in Segments::new(template) {
        match segment? {
            Segment::Literal(literal) => out.push_str(literal),
            Segment::Item(item) => {
                let arg = args.get(item.index).ok_or(FormatError::IndexOutOfRange {
                    index: item.index,
                    len: args.len(),
                })?;

                let start = out.len();
                arg.render(&mut out, item.format, provider)?;
                align(&mut out, start, item.alignment);
            }
        }
    }

    Ok(out)
}

/// Pads the text rendered after `start` with spaces to the width of the alignment.
fn align(out: &mut String, start: usize, alignment: isize) {
    let width = alignment.unsigned_abs();
    let rendered = out[start..].chars().count();
    if rendered >= width {
        return;
    }

    let padding = " ".repeat(width - rendered);
    if alignment > 0 {
        out.insert_str(start, &padding);
    } else {
        out.push_str(&padding);
    }
}
