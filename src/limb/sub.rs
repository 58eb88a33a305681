//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};
use core::ops::{Sub, SubAssign};
use num_traits::WrappingSub;

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow (0 or 1). `borrow` must be 0 or 1.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }

    /// Perform wrapping negation.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        Limb(self.0.wrapping_neg())
    }
}

impl Sub for Limb {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (res, borrow) = self.borrowing_sub(rhs, Limb::ZERO);
        assert_eq!(borrow, Limb::ZERO, "attempted to subtract with underflow");
        res
    }
}

impl SubAssign for Limb {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl WrappingSub for Limb {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        self.wrapping_sub(*v)
    }
}
