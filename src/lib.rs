//! Formats a value, or each value of a collection, into a positional template.
//!
//! The source value takes format item `{0}` and any trailing arguments take the indices after it.
//! For a collection, its values take `{0}` onward in iteration order.
//!
//! ```
//! use formatted_by::{Culture, FormattedBy, FormattedByEach};
//!
//! assert_eq!("abc".formatted_by("{0} and {1}", &[&"xyz"]).unwrap(), "abc and xyz");
//! assert_eq!(["a", "b"].formatted_by_each("{1}{0}{2}", &[&'!']).unwrap(), "ba!");
//!
//! let german = "de-DE".parse::<Culture>().unwrap();
//! assert_eq!(1234.5_f64.formatted_by_in(&german, "{0:N2}", &[]).unwrap(), "1.234,50");
//! ```

mod argument;
pub mod combine;
pub mod composite;
mod error;
mod formatted_by;
pub mod provider;

pub use argument::{FormatArg, Shown};
pub use error::{FormatError, TemplateErrorKind};
pub use formatted_by::{
    FormattedBy, FormattedByEach, format, format_iter, format_value, format_values,
};
pub use provider::{Culture, CultureError, FormatProvider, NumberFormatInfo};
