use tracing::{debug, trace};

use crate::{
    argument::FormatArg,
    combine::{Source, combine},
    composite,
    error::FormatError,
    provider::{Culture, FormatProvider},
};

/// Formats `template` with `args`, using the invariant culture when no provider is given.
///
/// # Errors
///
/// Returns whatever [`composite::format`] returns, unchanged.
pub fn format(
    provider: Option<&dyn FormatProvider>,
    template: &str,
    args: &[&dyn FormatArg],
) -> Result<String, FormatError> {
    let provider: &dyn FormatProvider = match provider {
        Some(provider) => provider,
        None => Culture::invariant(),
    };

    trace!(template, args = args.len(), "Formatting template");
    composite::format(provider, template, args)
        .inspect_err(|error| debug!(%error, template, "Failed to format template"))
}

/// Formats `template` with `value` at index 0 and `trailing` from index 1.
///
/// # Errors
///
/// See [`format`].
pub fn format_value(
    value: &dyn FormatArg,
    provider: Option<&dyn FormatProvider>,
    template: &str,
    trailing: &[&dyn FormatArg],
) -> Result<String, FormatError> {
    format(provider, template, &combine(Source::Value(value), trailing))
}

/// Formats `template` with `values` from index 0 and `trailing` after them.
///
/// # Errors
///
/// See [`format`].
pub fn format_values(
    values: &[&dyn FormatArg],
    provider: Option<&dyn FormatProvider>,
    template: &str,
    trailing: &[&dyn FormatArg],
) -> Result<String, FormatError> {
    format(provider, template, &combine(Source::Slice(values), trailing))
}

/// Formats `template` with the values of `values`, in iteration order, from index 0 and `trailing`
/// after them.
///
/// # Errors
///
/// See [`format`].
pub fn format_iter<'a, I>(
    values: I,
    provider: Option<&dyn FormatProvider>,
    template: &str,
    trailing: &[&'a dyn FormatArg],
) -> Result<String, FormatError>
where
    I: IntoIterator<Item = &'a dyn FormatArg>,
{
    let source = values.into_iter().collect::<Source<'_, 'a>>();
    format(provider, template, &combine(source, trailing))
}

/// Formats a value into a template ahead of any further arguments.
///
/// ```
/// use formatted_by::FormattedBy;
///
/// assert_eq!("abc".formatted_by("{0} and {1}", &[&"xyz"]).unwrap(), "abc and xyz");
/// ```
pub trait FormattedBy {
    /// Substitutes `self` at index 0 and `trailing` from index 1, using the invariant culture.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the template is malformed, indexes past the last argument, or
    /// has a format string an argument does not support.
    fn formatted_by(
        &self,
        template: &str,
        trailing: &[&dyn FormatArg],
    ) -> Result<String, FormatError>;

    /// Substitutes `self` at index 0 and `trailing` from index 1, using the rules of `provider`.
    ///
    /// # Errors
    ///
    /// See [`FormattedBy::formatted_by`].
    fn formatted_by_in(
        &self,
        provider: &dyn FormatProvider,
        template: &str,
        trailing: &[&dyn FormatArg],
    ) -> Result<String, FormatError>;
}

impl<T: FormatArg> FormattedBy for T {
    fn formatted_by(
        &self,
        template: &str,
        trailing: &[&dyn FormatArg],
    ) -> Result<String, FormatError> {
        format_value(self, None, template, trailing)
    }

    fn formatted_by_in(
        &self,
        provider: &dyn FormatProvider,
        template: &str,
        trailing: &[&dyn FormatArg],
    ) -> Result<String, FormatError> {
        format_value(self, Some(provider), template, trailing)
    }
}

/// Formats each value of a collection into a template, in order, ahead of any further arguments.
///
/// ```
/// use formatted_by::FormattedByEach;
///
/// assert_eq!([1_i32, 2].formatted_by_each("{0}-{1}-{2}", &[&3]).unwrap(), "1-2-3");
/// ```
pub trait FormattedByEach {
    /// Substitutes the values from index 0 and `trailing` after them, using the invariant
    /// culture.
    ///
    /// # Errors
    ///
    /// See [`FormattedBy::formatted_by`].
    fn formatted_by_each(
        &self,
        template: &str,
        trailing: &[&dyn FormatArg],
    ) -> Result<String, FormatError>;

    /// Substitutes the values from index 0 and `trailing` after them, using the rules of
    /// `provider`.
    ///
    /// # Errors
    ///
    /// See [`FormattedBy::formatted_by`].
    fn formatted_by_each_in(
        &self,
        provider: &dyn FormatProvider,
        template: &str,
        trailing: &[&dyn FormatArg],
    ) -> Result<String, FormatError>;
}

impl<T: FormatArg> FormattedByEach for [T] {
    fn formatted_by_each(
        &self,
        template: &str,
        trailing: &[&dyn FormatArg],
    ) -> Result<String, FormatError> {
        format(None, template, &combine(Source::from_slice(self), trailing))
    }

    fn formatted_by_each_in(
        &self,
        provider: &dyn FormatProvider,
        template: &str,
        trailing: &[&dyn FormatArg],
    ) -> Result<String, FormatError> {
        format(
            Some(provider),
            template,
            &combine(Source::from_slice(self), trailing),
        )
    }
}

/// Formats a value into a template, followed by any number of trailing arguments.
///
/// Pass `in provider` after the value to format with a provider other than the invariant
/// culture.
///
/// ```
/// use formatted_by::{Culture, formatted_by};
///
/// let german = "de-DE".parse::<Culture>().unwrap();
/// assert_eq!(formatted_by!(42, "{0}").unwrap(), "42");
/// assert_eq!(formatted_by!(1234.5, in &german, "{0:N2} {1}", "EUR").unwrap(), "1.234,50 EUR");
/// ```
#[macro_export]
macro_rules! formatted_by {
    ($value:expr, in $provider:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_value(
            &$value,
            ::core::option::Option::Some($provider),
            $template,
            &[$(&$arg as &dyn $crate::FormatArg),*],
        )
    };
    ($value:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format_value(
            &$value,
            ::core::option::Option::None,
            $template,
            &[$(&$arg as &dyn $crate::FormatArg),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, str::FromStr};

    use rstest::rstest;

    use super::{FormattedBy, FormattedByEach, format, format_iter, format_value, format_values};
    use crate::{
        argument::{FormatArg, Shown},
        error::FormatError,
        provider::{Culture, FormatProvider, NumberFormatInfo},
    };

    #[test]
    fn value_then_trailing() {
        assert_eq!(
            "abc".formatted_by("{0} and {1}", &[&"xyz"]).unwrap(),
            "abc and xyz"
        );
    }

    #[test]
    fn collection_then_trailing() {
        assert_eq!(
            [1_i32, 2].formatted_by_each("{0}-{1}-{2}", &[&3]).unwrap(),
            "1-2-3"
        );
    }

    #[test]
    fn value_without_trailing() {
        assert_eq!(42_i32.formatted_by("{0}", &[]).unwrap(), "42");
    }

    #[test]
    fn index_past_combined_arguments() {
        assert_eq!(
            "a".formatted_by("{0}{1}{2}", &[&"b"]),
            Err(FormatError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn empty_collection_then_trailing() {
        let empty: [i32; 0] = [];
        assert_eq!(empty.formatted_by_each("{0}", &[&"x"]).unwrap(), "x");
    }

    #[rstest]
    #[case::some_items("{0} {1}", 1, 2)]
    #[case::all_items("{0}{1}{2}{3}{4}", 3, 2)]
    #[case::one_source_many_trailing("{0} {5}", 1, 5)]
    fn single_value_matches_flat_arguments(
        #[case] template: &str,
        #[case] source_len: usize,
        #[case] trailing_len: usize,
    ) {
        let values = (0..source_len + trailing_len)
            .map(|index| format!("v{index}"))
            .collect::<Vec<_>>();
        let args = values
            .iter()
            .map(|value| value as &dyn FormatArg)
            .collect::<Vec<_>>();
        let (source, trailing) = args.split_at(source_len);

        assert_eq!(
            format_values(source, None, template, trailing),
            format(None, template, &args)
        );
        assert_eq!(
            values[..source_len].formatted_by_each(template, trailing),
            format(None, template, &args)
        );
    }

    #[test]
    fn vec_and_slice_agree() {
        let values = vec!["x", "y"];
        assert_eq!(
            values.formatted_by_each("{1}{0}{2}", &[&'!']),
            values.as_slice().formatted_by_each("{1}{0}{2}", &[&'!'])
        );
    }

    #[test]
    fn iterator_order_decides_indices() {
        let queue = VecDeque::from([3, 4, 5]);
        let rendered = format_iter(
            queue.iter().rev().map(|value| value as &dyn FormatArg),
            None,
            "{0}{1}{2}|{3}",
            &[&"end"],
        )
        .unwrap();
        assert_eq!(rendered, "543|end");
    }

    #[test]
    fn collection_of_mixed_values() {
        let values: [&dyn FormatArg; 3] = [&1, &"two", &Shown(3.5)];
        assert_eq!(
            format_values(&values, None, "{0} {1} {2} {3}", &[&None::<u8>]).unwrap(),
            "1 two 3.5 "
        );
    }

    #[test]
    fn invariant_provider_matches_default() {
        let invariant: &dyn FormatProvider = Culture::invariant();
        for template in ["{0:N2} {1}", "{0,8:F3}|{1,-4}|", "{1}{0}"] {
            assert_eq!(
                1234.5678_f64.formatted_by_in(invariant, template, &[&-7]),
                1234.5678_f64.formatted_by(template, &[&-7])
            );
            assert_eq!(
                [1_i32, 2].formatted_by_each_in(invariant, template, &[]),
                [1_i32, 2].formatted_by_each(template, &[])
            );
        }
    }

    #[rstest]
    #[case::german("de-DE", "1.234,50 | -3")]
    #[case::english("en-US", "1,234.50 | -3")]
    #[case::swedish("sv-SE", "1\u{A0}234,50 | \u{2212}3")]
    fn culture_aware(#[case] tag: &str, #[case] expected: &str) {
        let culture = Culture::from_str(tag).unwrap();
        assert_eq!(
            1234.5_f64
                .formatted_by_in(&culture, "{0:N2} | {1}", &[&-3])
                .unwrap(),
            expected
        );
    }

    #[test]
    fn custom_number_format() {
        let numbers = NumberFormatInfo::builder()
            .group_separator("'")
            .group_size(2)
            .build();
        assert_eq!(
            [123_456_i32].formatted_by_each_in(&numbers, "{0:N0}", &[]).unwrap(),
            "12'34'56"
        );
    }

    #[test]
    fn empty_template_yields_empty_string() {
        assert_eq!("ignored".formatted_by("", &[]).unwrap(), "");
        assert_eq!(format_value(&1, None, "", &[&2]).unwrap(), "");
    }

    #[test]
    fn errors_propagate_unchanged() {
        assert_eq!(
            1_i32.formatted_by("{0:Q}", &[]),
            Err(FormatError::UnsupportedSpecifier {
                specifier: "Q".into()
            })
        );
        assert!(matches!(
            [1_i32].formatted_by_each("{0", &[]),
            Err(FormatError::MalformedTemplate { .. })
        ));
    }

    #[test]
    fn macro_without_trailing() {
        assert_eq!(formatted_by!(42, "{0}").unwrap(), "42");
    }

    #[test]
    fn macro_with_trailing() {
        assert_eq!(
            formatted_by!("abc", "{0} and {1}, {2}", "xyz", 3,).unwrap(),
            "abc and xyz, 3"
        );
    }

    #[test]
    fn macro_with_provider() {
        let french = Culture::from_str("fr-FR").unwrap();
        assert_eq!(
            formatted_by!(0.5, in &french, "{0:F1}/{1:N0}", 10_000).unwrap(),
            "0,5/10\u{202F}000"
        );
    }
}
