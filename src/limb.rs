//! Big integers are represented as arrays of smaller CPU word-size integers
//! called "limbs".

mod add;
mod bits;
mod cmp;
mod encoding;
mod mul;
mod sub;

use crate::Word;
use core::fmt;

/// Calculate the number of limbs required to represent the given number of bits.
#[inline(always)]
#[must_use]
pub const fn nlimbs(bits: u32) -> usize {
    if cfg!(target_pointer_width = "32") {
        ((bits + 31) >> 5) as usize
    } else if cfg!(target_pointer_width = "64") {
        ((bits + 63) >> 6) as usize
    } else {
        unreachable!()
    }
}

/// One machine-word-sized unsigned element of a big integer's little-endian
/// limb array.
///
/// All bits of the inner [`Word`] are significant; there is no sign and no
/// saturation in the representation itself.
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    // 32-bit

    /// Size of the inner integer in bits.
    #[cfg(target_pointer_width = "32")]
    pub const BITS: u32 = 32;
    /// Size of the inner integer in bytes.
    #[cfg(target_pointer_width = "32")]
    pub const BYTES: usize = 4;

    // 64-bit

    /// Size of the inner integer in bits.
    #[cfg(target_pointer_width = "64")]
    pub const BITS: u32 = 64;
    /// Size of the inner integer in bytes.
    #[cfg(target_pointer_width = "64")]
    pub const BYTES: usize = 8;
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

impl From<Word> for Limb {
    #[inline]
    fn from(word: Word) -> Self {
        Limb(word)
    }
}

impl From<Limb> for Word {
    #[inline]
    fn from(limb: Limb) -> Self {
        limb.0
    }
}

impl num_traits::Zero for Limb {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        bool::from(Limb::is_zero(self))
    }
}

impl num_traits::One for Limb {
    fn one() -> Self {
        Self::ONE
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}

#[cfg(test)]
mod tests {
    use super::Limb;
    use std::format;

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Limb(42)), "Limb(0x0000002A)");
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Limb(42)), "Limb(0x000000000000002A)");
    }
}
