//! Big unsigned integers with a compile-time limb count.

mod add;
mod bits;
mod encoding;
mod mul;
mod sub;

use crate::{Limb, UintRef, Word, limb::nlimbs};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// 64-bit unsigned big integer.
pub type U64 = Uint<{ nlimbs(64) }>;

/// 128-bit unsigned big integer.
pub type U128 = Uint<{ nlimbs(128) }>;

/// 256-bit unsigned big integer.
pub type U256 = Uint<{ nlimbs(256) }>;

/// 512-bit unsigned big integer.
pub type U512 = Uint<{ nlimbs(512) }>;

/// 1024-bit unsigned big integer.
pub type U1024 = Uint<{ nlimbs(1024) }>;

/// Fixed-width big unsigned integer, generic over the number of `LIMBS`.
///
/// This is the strong-typing boundary over the slice-level [`UintRef`] core:
/// two [`Uint`]s can only meet in an operation when their widths agree, so a
/// mismatched limb count is a type error instead of a silent contract
/// violation.
#[derive(Copy, Clone, Hash)]
pub struct Uint<const LIMBS: usize> {
    /// Inner limb array. Stored from least significant to most significant.
    limbs: [Limb; LIMBS],
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// The value `0`.
    pub const ZERO: Self = Self {
        limbs: [Limb::ZERO; LIMBS],
    };

    /// The value `1`.
    pub const ONE: Self = {
        let mut limbs = [Limb::ZERO; LIMBS];
        limbs[0] = Limb::ONE;
        Self { limbs }
    };

    /// Maximum value this [`Uint`] can express.
    pub const MAX: Self = Self {
        limbs: [Limb::MAX; LIMBS],
    };

    /// Total size of the represented integer in bits.
    pub const BITS: u32 = LIMBS as u32 * Limb::BITS;

    /// Total size of the represented integer in bytes.
    pub const BYTES: usize = LIMBS * Limb::BYTES;

    /// The number of limbs used on this platform.
    pub const LIMBS: usize = LIMBS;

    /// Const-friendly [`Uint`] constructor.
    pub const fn new(limbs: [Limb; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Create a [`Uint`] from an array of [`Word`]s (i.e. word-sized unsigned
    /// integers).
    #[inline]
    pub const fn from_words(arr: [Word; LIMBS]) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(arr[i]);
            i += 1;
        }

        Self { limbs }
    }

    /// Create an array of [`Word`]s from a [`Uint`].
    #[inline]
    pub const fn to_words(self) -> [Word; LIMBS] {
        let mut arr = [0; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            arr[i] = self.limbs[i].0;
            i += 1;
        }

        arr
    }

    /// Create a [`Uint`] from a `u64`.
    pub const fn from_u64(n: u64) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        #[cfg(target_pointer_width = "32")]
        {
            assert!(LIMBS >= 2, "number of limbs must be two or greater");
            limbs[0] = Limb(n as u32);
            limbs[1] = Limb((n >> 32) as u32);
        }

        #[cfg(target_pointer_width = "64")]
        {
            assert!(LIMBS >= 1, "number of limbs must be nonzero");
            limbs[0] = Limb(n);
        }

        Self { limbs }
    }

    /// Borrow the limbs of this [`Uint`].
    pub const fn as_limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Borrow the limbs of this [`Uint`] mutably.
    pub const fn as_limbs_mut(&mut self) -> &mut [Limb; LIMBS] {
        &mut self.limbs
    }

    /// Convert this [`Uint`] into its inner limbs.
    pub const fn to_limbs(self) -> [Limb; LIMBS] {
        self.limbs
    }

    /// Borrow as a slice-level [`UintRef`].
    #[inline]
    pub const fn as_uint_ref(&self) -> &UintRef {
        UintRef::new(&self.limbs)
    }

    /// Mutably borrow as a slice-level [`UintRef`].
    #[inline]
    pub const fn as_mut_uint_ref(&mut self) -> &mut UintRef {
        UintRef::new_mut(&mut self.limbs)
    }

    /// Returns the truthy value if this integer is odd.
    #[inline]
    pub fn is_odd(&self) -> Choice {
        if LIMBS == 0 {
            Choice::from(0)
        } else {
            Choice::from((self.limbs[0].0 & 1) as u8)
        }
    }
}

impl<const LIMBS: usize> AsRef<[Limb]> for Uint<LIMBS> {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl<const LIMBS: usize> AsMut<[Limb]> for Uint<LIMBS> {
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_limbs_mut()
    }
}

impl<const LIMBS: usize> AsRef<UintRef> for Uint<LIMBS> {
    fn as_ref(&self) -> &UintRef {
        self.as_uint_ref()
    }
}

impl<const LIMBS: usize> AsMut<UintRef> for Uint<LIMBS> {
    fn as_mut(&mut self) -> &mut UintRef {
        self.as_mut_uint_ref()
    }
}

impl<const LIMBS: usize> ConditionallySelectable for Uint<LIMBS> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];

        for i in 0..LIMBS {
            limbs[i] = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }

        Self { limbs }
    }
}

impl<const LIMBS: usize> ConstantTimeEq for Uint<LIMBS> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs.as_slice().ct_eq(other.limbs.as_slice())
    }
}

impl<const LIMBS: usize> Eq for Uint<LIMBS> {}

impl<const LIMBS: usize> PartialEq for Uint<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> fmt::Debug for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:X})")
    }
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<const LIMBS: usize> fmt::LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl<const LIMBS: usize> fmt::UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl<const LIMBS: usize> zeroize::DefaultIsZeroes for Uint<LIMBS> {}

#[cfg(test)]
mod tests {
    use super::Uint;
    use crate::Limb;

    type U = Uint<2>;

    #[test]
    fn one_and_zero() {
        assert_eq!(U::ZERO.as_limbs(), &[Limb::ZERO, Limb::ZERO]);
        assert_eq!(U::ONE.as_limbs(), &[Limb::ONE, Limb::ZERO]);
    }

    #[test]
    fn is_odd() {
        assert!(bool::from(U::ONE.is_odd()));
        assert!(!bool::from(U::ZERO.is_odd()));
        assert!(bool::from(U::MAX.is_odd()));
    }

    #[test]
    fn words_roundtrip() {
        let x = U::from_words([3, 4]);
        assert_eq!(x.to_words(), [3, 4]);
    }
}
