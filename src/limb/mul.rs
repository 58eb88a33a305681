//! Limb multiplication

use crate::{
    Limb,
    primitives::{carrying_mul_add, widening_mul},
};
use core::ops::{Mul, MulAssign};
use num_traits::WrappingMul;

impl Limb {
    /// Computes `self + (b * c) + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(b.0, c.0, self.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Compute "wide" multiplication, with a product twice the size of the input.
    ///
    /// Returns the limbs of the product as `(lo, hi)`.
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }
}

impl Mul for Limb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (lo, hi) = self.widening_mul(rhs);
        assert_eq!(hi, Limb::ZERO, "attempted to multiply with overflow");
        lo
    }
}

impl MulAssign for Limb {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl WrappingMul for Limb {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        self.wrapping_mul(*v)
    }
}
