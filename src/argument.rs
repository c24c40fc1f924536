use std::{borrow::Cow, fmt, rc::Rc, sync::Arc};

use compact_str::CompactString;
use derive_more::{AsRef, Deref, From};

use crate::{composite::number, error::FormatError, provider::FormatProvider};

/// A value that can be substituted into a format item.
///
/// `format` is the text after the `:` of the item, or empty when the item has none. Types without
/// format strings of their own ignore it.
pub trait FormatArg {
    fn render(
        &self,
        out: &mut String,
        format: &str,
        provider: &dyn FormatProvider,
    ) -> Result<(), FormatError>;
}

/// Substitutes any [`Display`](fmt::Display) type through its `Display` implementation.
///
/// The format string of the item is ignored.
#[derive(AsRef, Clone, Copy, Debug, Deref, From, Eq, PartialEq, Hash)]
pub struct Shown<T>(pub T);

impl<T: fmt::Display> FormatArg for Shown<T> {
    fn render(
        &self,
        out: &mut String,
        _format: &str,
        _provider: &dyn FormatProvider,
    ) -> Result<(), FormatError> {
        out.push_str(&self.0.to_string());
        Ok(())
    }
}

macro_rules! text_arg {
    ($($text:ty),*$(,)?) => {
        $(
            impl FormatArg for $text {
                #[inline]
                fn render(
                    &self,
                    out: &mut String,
                    _format: &str,
                    _provider: &dyn FormatProvider,
                ) -> Result<(), FormatError> {
                    out.push_str(self);
                    Ok(())
                }
            }
        )*
    };
}

text_arg!(str, String, CompactString, Cow<'_, str>);

impl FormatArg for char {
    #[inline]
    fn render(
        &self,
        out: &mut String,
        _format: &str,
        _provider: &dyn FormatProvider,
    ) -> Result<(), FormatError> {
        out.push(*self);
        Ok(())
    }
}

impl FormatArg for bool {
    #[inline]
    fn render(
        &self,
        out: &mut String,
        _format: &str,
        _provider: &dyn FormatProvider,
    ) -> Result<(), FormatError> {
        out.push_str(if *self { "true" } else { "false" });
        Ok(())
    }
}

/// The absent value renders as nothing.
impl FormatArg for () {
    #[inline]
    fn render(
        &self,
        _out: &mut String,
        _format: &str,
        _provider: &dyn FormatProvider,
    ) -> Result<(), FormatError> {
        Ok(())
    }
}

impl<T: FormatArg> FormatArg for Option<T> {
    fn render(
        &self,
        out: &mut String,
        format: &str,
        provider: &dyn FormatProvider,
    ) -> Result<(), FormatError> {
        match self {
            Some(value) => value.render(out, format, provider),
            None => Ok(()),
        }
    }
}

macro_rules! pointer_arg {
    ($($pointer:ty),*$(,)?) => {
        $(
            impl<T: FormatArg + ?Sized> FormatArg for $pointer {
                #[inline]
                fn render(
                    &self,
                    out: &mut String,
                    format: &str,
                    provider: &dyn FormatProvider,
                ) -> Result<(), FormatError> {
                    (**self).render(out, format, provider)
                }
            }
        )*
    };
}

pointer_arg!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! signed_arg {
    ($($signed:ty => $unsigned:ty),*$(,)?) => {
        $(
            impl FormatArg for $signed {
                fn render(
                    &self,
                    out: &mut String,
                    format: &str,
                    provider: &dyn FormatProvider,
                ) -> Result<(), FormatError> {
                    let integer = number::Integer {
                        negative: *self < 0,
                        magnitude: self.unsigned_abs() as u128,
                        bits: *self as $unsigned as u128,
                    };
                    number::write_integer(out, integer, format, provider.number_format())
                }
            }
        )*
    };
}

signed_arg!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

macro_rules! unsigned_arg {
    ($($unsigned:ty),*$(,)?) => {
        $(
            impl FormatArg for $unsigned {
                fn render(
                    &self,
                    out: &mut String,
                    format: &str,
                    provider: &dyn FormatProvider,
                ) -> Result<(), FormatError> {
                    let integer = number::Integer {
                        negative: false,
                        magnitude: *self as u128,
                        bits: *self as u128,
                    };
                    number::write_integer(out, integer, format, provider.number_format())
                }
            }
        )*
    };
}

unsigned_arg!(u8, u16, u32, u64, u128, usize);

impl FormatArg for f32 {
    fn render(
        &self,
        out: &mut String,
        format: &str,
        provider: &dyn FormatProvider,
    ) -> Result<(), FormatError> {
        number::write_float(out, *self, format, provider.number_format())
    }
}

impl FormatArg for f64 {
    fn render(
        &self,
        out: &mut String,
        format: &str,
        provider: &dyn FormatProvider,
    ) -> Result<(), FormatError> {
        number::write_float(out, *self, format, provider.number_format())
    }
}
