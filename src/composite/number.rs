use std::fmt;

use crate::{error::FormatError, provider::NumberFormatInfo};

/// Precision above this is rejected rather than padded.
const MAX_PRECISION: u8 = 99;

/// An integer split into what the specifiers need.
///
/// `bits` is the two's complement pattern of the value at its own width, used for hexadecimal.
#[derive(Clone, Copy, Debug)]
pub struct Integer {
    pub negative: bool,
    pub magnitude: u128,
    pub bits: u128,
}

/// A standard numeric format string such as `N2` or `X8`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Specifier {
    General,
    Decimal(Option<u8>),
    Fixed(Option<u8>),
    Number(Option<u8>),
    Hex { uppercase: bool, digits: Option<u8> },
}

impl Specifier {
    fn parse(format: &str) -> Result<Self, FormatError> {
        let mut chars = format.chars();
        let Some(kind) = chars.next() else {
            return Ok(Self::General);
        };

        let precision = chars.as_str();
        let precision = if precision.is_empty() {
            None
        } else if precision.bytes().all(|byte| byte.is_ascii_digit()) {
            match precision.parse::<u8>() {
                Ok(precision) if precision <= MAX_PRECISION => Some(precision),
                _ => return Err(FormatError::unsupported(format)),
            }
        } else {
            return Err(FormatError::unsupported(format));
        };

        match kind {
            'G' | 'g' if precision.is_none() => Ok(Self::General),
            'D' | 'd' => Ok(Self::Decimal(precision)),
            'F' | 'f' => Ok(Self::Fixed(precision)),
            'N' | 'n' => Ok(Self::Number(precision)),
            'X' | 'x' => Ok(Self::Hex {
                uppercase: kind == 'X',
                digits: precision,
            }),
            _ => Err(FormatError::unsupported(format)),
        }
    }
}

pub fn write_integer(
    out: &mut String,
    integer: Integer,
    format: &str,
    numbers: &NumberFormatInfo,
) -> Result<(), FormatError> {
    let Integer {
        negative,
        magnitude,
        bits,
    } = integer;

    match Specifier::parse(format)? {
        Specifier::General => {
            push_sign(out, negative, numbers);
            out.push_str(&magnitude.to_string());
        }
        Specifier::Decimal(digits) => {
            push_sign(out, negative, numbers);
            push_zero_padded(out, &magnitude.to_string(), digits);
        }
        Specifier::Fixed(decimals) => {
            push_sign(out, negative, numbers);
            out.push_str(&magnitude.to_string());
            push_zero_fraction(out, decimals, numbers);
        }
        Specifier::Number(decimals) => {
            push_sign(out, negative, numbers);
            push_grouped(out, &magnitude.to_string(), numbers);
            push_zero_fraction(out, decimals, numbers);
        }
        Specifier::Hex { uppercase, digits } => {
            let hex = if uppercase {
                format!("{bits:X}")
            } else {
                format!("{bits:x}")
            };
            push_zero_padded(out, &hex, digits);
        }
    }

    Ok(())
}

/// The float types that can be formatted.
pub trait Float: Copy + fmt::Display {
    fn is_nan(self) -> bool;

    fn is_infinite(self) -> bool;

    fn is_sign_negative(self) -> bool;

    fn abs(self) -> Self;
}

macro_rules! float {
    ($($float:ty),*) => {
        $(
            impl Float for $float {
                #[inline]
                fn is_nan(self) -> bool {
                    <$float>::is_nan(self)
                }

                #[inline]
                fn is_infinite(self) -> bool {
                    <$float>::is_infinite(self)
                }

                #[inline]
                fn is_sign_negative(self) -> bool {
                    <$float>::is_sign_negative(self)
                }

                #[inline]
                fn abs(self) -> Self {
                    <$float>::abs(self)
                }
            }
        )*
    };
}

float!(f32, f64);

pub fn write_float<F: Float>(
    out: &mut String,
    value: F,
    format: &str,
    numbers: &NumberFormatInfo,
) -> Result<(), FormatError> {
    let specifier = Specifier::parse(format)?;
    if matches!(specifier, Specifier::Decimal(_) | Specifier::Hex { .. }) {
        return Err(FormatError::unsupported(format));
    }

    if value.is_nan() {
        out.push_str(numbers.nan_symbol());
        return Ok(());
    }

    if value.is_infinite() {
        out.push_str(if value.is_sign_negative() {
            numbers.negative_infinity_symbol()
        } else {
            numbers.positive_infinity_symbol()
        });
        return Ok(());
    }

    let negative = value.is_sign_negative();
    let magnitude = value.abs();

    let (rendered, grouped) = match specifier {
        Specifier::Fixed(decimals) => (fixed(magnitude, decimals, numbers), false),
        Specifier::Number(decimals) => (fixed(magnitude, decimals, numbers), true),
        _ => (magnitude.to_string(), false),
    };

    let (integral, fraction) = rendered
        .split_once('.')
        .map_or((rendered.as_str(), None), |(integral, fraction)| {
            (integral, Some(fraction))
        });

    push_sign(out, negative, numbers);
    if grouped {
        push_grouped(out, integral, numbers);
    } else {
        out.push_str(integral);
    }
    if let Some(fraction) = fraction {
        out.push_str(numbers.decimal_separator());
        out.push_str(fraction);
    }

    Ok(())
}

fn fixed<F: Float>(magnitude: F, decimals: Option<u8>, numbers: &NumberFormatInfo) -> String {
    let decimals = usize::from(decimals.unwrap_or_else(|| numbers.number_decimal_digits()));
    format!("{magnitude:.decimals$}")
}

fn push_sign(out: &mut String, negative: bool, numbers: &NumberFormatInfo) {
    if negative {
        out.push_str(numbers.negative_sign());
    }
}

fn push_zero_padded(out: &mut String, digits: &str, width: Option<u8>) {
    let width = usize::from(width.unwrap_or_default());
    for _ in digits.len()..width {
        out.push('0');
    }
    out.push_str(digits);
}

fn push_zero_fraction(out: &mut String, decimals: Option<u8>, numbers: &NumberFormatInfo) {
    let decimals = decimals.unwrap_or_else(|| numbers.number_decimal_digits());
    if decimals > 0 {
        out.push_str(numbers.decimal_separator());
        for _ in 0..decimals {
            out.push('0');
        }
    }
}

/// Pushes ASCII digits with the group separator between every group, counting from the right.
fn push_grouped(out: &mut String, digits: &str, numbers: &NumberFormatInfo) {
    let size = usize::from(numbers.group_size());
    if size == 0 {
        out.push_str(digits);
        return;
    }

    for (index, digit) in digits.char_indices() {
        if index != 0 && (digits.len() - index) % size == 0 {
            out.push_str(numbers.group_separator());
        }
        out.push(digit);
    }
}
