//! Explicit validity wrapper returned by the permissive `of` constructors.

use std::fmt;

/// A value that is either valid or the "invalid" placeholder.
///
/// Permissive constructors such as [`Vec2::of`](crate::Vec2::of) never fail;
/// they return [`Checked::Invalid`] when an input component is NaN. Invalid
/// regions still answer region queries (zero area, no points), see
/// [`Region`](crate::Region).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checked<T> {
    /// A fully constructed value.
    Valid(T),
    /// The placeholder for "no value".
    Invalid,
}

impl<T> Checked<T> {
    /// Returns `true` if this holds a value.
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Checked::Valid(_))
    }

    /// Returns a reference to the value, if valid.
    #[inline]
    pub fn valid(&self) -> Option<&T> {
        match self {
            Checked::Valid(value) => Some(value),
            Checked::Invalid => None,
        }
    }

    /// Converts into an `Option`, discarding the distinction's name.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Checked::Valid(value) => Some(value),
            Checked::Invalid => None,
        }
    }

    /// Converts into a `Result`, using `err` for the invalid case.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        self.into_option().ok_or(err)
    }

    /// Maps the contained value, leaving `Invalid` untouched.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        match self {
            Checked::Valid(value) => Checked::Valid(f(value)),
            Checked::Invalid => Checked::Invalid,
        }
    }

    /// Chains another permissive computation.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Checked<U>) -> Checked<U> {
        match self {
            Checked::Valid(value) => f(value),
            Checked::Invalid => Checked::Invalid,
        }
    }
}

impl<T> From<Option<T>> for Checked<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Checked::Valid(value),
            None => Checked::Invalid,
        }
    }
}

impl<T, E> From<Result<T, E>> for Checked<T> {
    fn from(value: Result<T, E>) -> Self {
        value.ok().into()
    }
}

impl<T: fmt::Display> fmt::Display for Checked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checked::Valid(value) => value.fmt(f),
            Checked::Invalid => f.write_str("INVALID"),
        }
    }
}
