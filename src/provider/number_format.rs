use bon::Builder;
use compact_str::CompactString;
use serde::Deserialize;

/// Symbols and sizes used to render numbers.
///
/// The defaults are those of the invariant culture. Any field can be overridden through
/// [`NumberFormatInfo::builder`] or when deserializing, where missing fields keep their default.
#[derive(Builder, Clone, Debug, Eq, PartialEq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberFormatInfo {
    /// Separates the integral and fractional parts.
    #[builder(into, default = CompactString::new("."))]
    decimal_separator: CompactString,

    /// Separates digit groups in the integral part.
    #[builder(into, default = CompactString::new(","))]
    group_separator: CompactString,

    #[builder(into, default = CompactString::new("-"))]
    negative_sign: CompactString,

    #[builder(into, default = CompactString::new("NaN"))]
    nan_symbol: CompactString,

    #[builder(into, default = CompactString::new("Infinity"))]
    positive_infinity_symbol: CompactString,

    #[builder(into, default = CompactString::new("-Infinity"))]
    negative_infinity_symbol: CompactString,

    /// Decimal places used by `F` and `N` when the specifier has no precision.
    #[builder(default = 2)]
    number_decimal_digits: u8,

    /// Number of digits in each group. Zero disables grouping.
    #[builder(default = 3)]
    group_size: u8,
}

impl NumberFormatInfo {
    #[must_use]
    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    #[must_use]
    pub fn group_separator(&self) -> &str {
        &self.group_separator
    }

    #[must_use]
    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    #[must_use]
    pub fn nan_symbol(&self) -> &str {
        &self.nan_symbol
    }

    #[must_use]
    pub fn positive_infinity_symbol(&self) -> &str {
        &self.positive_infinity_symbol
    }

    #[must_use]
    pub fn negative_infinity_symbol(&self) -> &str {
        &self.negative_infinity_symbol
    }

    #[must_use]
    pub const fn number_decimal_digits(&self) -> u8 {
        self.number_decimal_digits
    }

    #[must_use]
    pub const fn group_size(&self) -> u8 {
        self.group_size
    }
}

impl Default for NumberFormatInfo {
    fn default() -> Self {
        Self::builder().build()
    }
}
