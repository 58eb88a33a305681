//! Unsigned big integer reference type.

mod add;
mod bits;
mod encoding;
mod mul;
mod sub;

use crate::Limb;
use core::fmt;

/// A borrowed unsigned big integer: a slice of [`Limb`]s in little-endian
/// limb order.
///
/// This is the slice-level core every other API in the crate is built on.
/// The limb count is the slice length; it is owned by the caller, never
/// inferred, and never normalized — leading zero limbs are preserved. The
/// value `0` is representable at any length, including zero limbs.
///
/// In-place operations take `&mut self` plus shared operands, so the
/// disjointness contracts of the underlying algorithms are enforced by the
/// borrow checker rather than documented as undefined behavior.
#[repr(transparent)]
#[derive(Eq)]
pub struct UintRef(pub [Limb]);

impl UintRef {
    /// Create a [`UintRef`] reference type from a [`Limb`] slice.
    #[inline]
    pub const fn new(limbs: &[Limb]) -> &Self {
        // SAFETY: `UintRef` is a `repr(transparent)` newtype for `[Limb]`.
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &*(limbs as *const [Limb] as *const UintRef)
        }
    }

    /// Create a mutable [`UintRef`] reference type from a [`Limb`] slice.
    #[inline]
    pub const fn new_mut(limbs: &mut [Limb]) -> &mut Self {
        // SAFETY: `UintRef` is a `repr(transparent)` newtype for `[Limb]`.
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &mut *(limbs as *mut [Limb] as *mut UintRef)
        }
    }

    /// Borrow the inner `&[Limb]` slice.
    #[inline]
    pub const fn as_slice(&self) -> &[Limb] {
        &self.0
    }

    /// Mutably borrow the inner `&mut [Limb]` slice.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [Limb] {
        &mut self.0
    }

    /// Access the number of limbs.
    #[inline]
    pub const fn nlimbs(&self) -> usize {
        self.0.len()
    }

    /// Assign all limbs to zero.
    #[inline]
    pub fn set_zero(&mut self) {
        self.0.fill(Limb::ZERO);
    }

    /// Copy the limbs of `source` into the low limbs of `self`, zeroing the
    /// rest.
    ///
    /// `self` must have at least as many limbs as `source`.
    #[inline]
    pub fn copy_from(&mut self, source: &Self) {
        debug_assert!(self.nlimbs() >= source.nlimbs(), "length mismatch");
        let (lo, hi) = self.0.split_at_mut(source.nlimbs());
        lo.copy_from_slice(&source.0);
        hi.fill(Limb::ZERO);
    }

    /// Get the byte at position `index` of the canonical little-endian byte
    /// string of this integer, without range checks.
    #[inline]
    pub(crate) const fn byte(&self, index: usize) -> u8 {
        (self.0[index / Limb::BYTES].0 >> ((index % Limb::BYTES) * 8)) as u8
    }
}

impl AsRef<[Limb]> for UintRef {
    #[inline]
    fn as_ref(&self) -> &[Limb] {
        self.as_slice()
    }
}

impl AsMut<[Limb]> for UintRef {
    #[inline]
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_mut_slice()
    }
}

impl PartialEq for UintRef {
    /// Equality of equal-length operands is constant-time in the limb values;
    /// the lengths themselves are public.
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.nlimbs() == other.nlimbs() && bool::from(self.0.ct_eq(&other.0))
    }
}

impl fmt::Debug for UintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UintRef(0x")?;
        for limb in self.0.iter().rev() {
            write!(f, "{limb:x}")?;
        }
        f.write_str(")")
    }
}
