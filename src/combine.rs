use std::ops::Deref;

use smallvec::SmallVec;

use crate::argument::FormatArg;

/// Most calls substitute a handful of arguments, which fit inline.
pub const INLINE_ARGS: usize = 8;

pub type ArgVec<'a> = SmallVec<[&'a dyn FormatArg; INLINE_ARGS]>;

/// The value or values that take the first format item indices.
pub enum Source<'s, 'a> {
    /// A single value at index 0.
    Value(&'a dyn FormatArg),
    /// A borrowed, directly indexable collection.
    Slice(&'s [&'a dyn FormatArg]),
    /// A collection gathered from an iterator.
    Items(ArgVec<'a>),
}

impl<'a> Source<'_, 'a> {
    pub fn from_slice<T: FormatArg>(values: &'a [T]) -> Self {
        values
            .iter()
            .map(|value| value as &dyn FormatArg)
            .collect()
    }

    /// The number of format item indices the source occupies.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Value(_) => 1,
            Self::Slice(values) => values.len(),
            Self::Items(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> FromIterator<&'a dyn FormatArg> for Source<'_, 'a> {
    fn from_iter<I: IntoIterator<Item = &'a dyn FormatArg>>(iter: I) -> Self {
        Self::Items(iter.into_iter().collect())
    }
}

/// The source values followed by the trailing arguments.
pub enum Combined<'s, 'a> {
    Borrowed(&'s [&'a dyn FormatArg]),
    Owned(ArgVec<'a>),
}

impl<'a> Deref for Combined<'_, 'a> {
    type Target = [&'a dyn FormatArg];

    fn deref(&self) -> &Self::Target {
        match *self {
            Self::Borrowed(args) => args,
            Self::Owned(ref args) => args.as_slice(),
        }
    }
}

/// Places the source values at indices `0..n` and the trailing arguments after them.
///
/// Nothing is copied when there are no trailing arguments and the source is a slice or was already
/// collected.
pub fn combine<'s, 'a>(
    source: Source<'s, 'a>,
    trailing: &[&'a dyn FormatArg],
) -> Combined<'s, 'a> {
    match source {
        Source::Slice(values) if trailing.is_empty() => Combined::Borrowed(values),
        Source::Slice(values) => {
            let mut combined = ArgVec::with_capacity(values.len() + trailing.len());
            combined.extend_from_slice(values);
            combined.extend_from_slice(trailing);
            Combined::Owned(combined)
        }
        Source::Value(value) => {
            let mut combined = ArgVec::with_capacity(1 + trailing.len());
            combined.push(value);
            combined.extend_from_slice(trailing);
            Combined::Owned(combined)
        }
        Source::Items(mut values) => {
            values.extend_from_slice(trailing);
            Combined::Owned(values)
        }
    }
}
