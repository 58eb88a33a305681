//! Wrapper type for odd integers.

use crate::Uint;
use core::{fmt, ops::Deref};
use subtle::{Choice, ConstantTimeEq, CtOption};

/// Wrapper type for odd integers.
///
/// These are frequently used in cryptography, e.g. as a modulus: carrying
/// the oddness in the type moves the "must be odd" precondition of the
/// Montgomery routines from a runtime contract to the construction site.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Odd<T>(pub(crate) T);

impl<T> Odd<T> {
    /// Provides access to the contents of [`Odd`] in a `const` context.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl<const LIMBS: usize> Odd<Uint<LIMBS>> {
    /// Create a new odd integer, checking the low bit in constant time.
    pub fn new(n: Uint<LIMBS>) -> CtOption<Self> {
        let is_odd = n.is_odd();
        CtOption::new(Self(n), is_odd)
    }

    /// Create a new [`Odd<Uint<LIMBS>>`] from a big-endian hex string.
    ///
    /// Panics if the hex is malformed, not zero-padded for the size, or if
    /// the value is even. Intended for constants and test vectors.
    pub const fn from_be_hex(hex: &str) -> Self {
        let uint = Uint::<LIMBS>::from_be_hex(hex);
        assert!(
            LIMBS > 0 && uint.as_limbs()[0].0 & 1 == 1,
            "number must be odd"
        );
        Odd(uint)
    }
}

impl<T> AsRef<T> for Odd<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Odd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ConstantTimeEq> ConstantTimeEq for Odd<T> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<T: fmt::Display> fmt::Display for Odd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
