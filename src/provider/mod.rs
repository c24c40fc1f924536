mod culture;
mod number_format;

pub use culture::{Culture, CultureError};
pub use number_format::NumberFormatInfo;

/// Supplies the locale rules used while rendering arguments to text.
pub trait FormatProvider {
    fn number_format(&self) -> &NumberFormatInfo;
}

impl FormatProvider for NumberFormatInfo {
    #[inline]
    fn number_format(&self) -> &NumberFormatInfo {
        self
    }
}

impl FormatProvider for Culture {
    #[inline]
    fn number_format(&self) -> &NumberFormatInfo {
        self.numbers()
    }
}

impl<P: FormatProvider + ?Sized> FormatProvider for &P {
    #[inline]
    fn number_format(&self) -> &NumberFormatInfo {
        (**self).number_format()
    }
}
