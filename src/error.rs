//! Error types for deltoid operations.

use thiserror::Error;

/// Errors that can occur while constructing or operating on vectors and regions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A component passed to a strict constructor (or produced by arithmetic) was NaN.
    #[error("{component} shall not be NaN")]
    NanComponent {
        /// Name of the offending component, e.g. `"x"` or `"radius"`.
        component: &'static str,
    },

    /// A circle or sphere was given a negative radius.
    #[error("radius shall not be negative")]
    NegativeRadius,

    /// Grid enumeration was requested over a box with a non-finite extent.
    #[error("region is unbounded; cannot enumerate its grid points")]
    Unbounded,

    /// Grid enumeration was requested over a finite box with more cells than
    /// a single allocation can hold.
    #[error("region spans too many grid points to enumerate")]
    TooManyPoints,
}
