//! Bit-exact float comparison helpers.
//!
//! Vectors and regions compare their components by IEEE-754 bit pattern, so
//! `0.0 != -0.0` and every value equals itself. This makes `Eq` and `Hash`
//! lawful for float-backed types.

use num_traits::Float;
use std::hash::{Hash, Hasher};

/// Injective decoding of a float's bit pattern.
pub(crate) type BitKey = (u64, i16, i8);

#[inline]
pub(crate) fn key<F: Float>(value: F) -> BitKey {
    value.integer_decode()
}

#[inline]
pub(crate) fn same<F: Float>(a: F, b: F) -> bool {
    key(a) == key(b)
}

#[inline]
pub(crate) fn hash<F: Float, H: Hasher>(value: F, state: &mut H) {
    key(value).hash(state);
}

/// The smaller of two values; ties (`0.0` against `-0.0`) break by bit key.
#[inline]
pub(crate) fn lesser<F: Float>(a: F, b: F) -> F {
    if a < b || (a == b && key(a) <= key(b)) {
        a
    } else {
        b
    }
}

/// The larger of two values; ties (`0.0` against `-0.0`) break by bit key.
#[inline]
pub(crate) fn greater<F: Float>(a: F, b: F) -> F {
    if a > b || (a == b && key(a) >= key(b)) {
        a
    } else {
        b
    }
}

/// Keys for a sequence of components, in order.
pub(crate) fn keys<F: Float>(values: &[F]) -> Vec<BitKey> {
    values.iter().map(|&v| key(v)).collect()
}
