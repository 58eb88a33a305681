//! Limb comparisons: constant-time unless explicitly noted otherwise.

use super::Limb;
use crate::Word;
use core::cmp::Ordering;
use subtle::{
    Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
};

impl Limb {
    /// Is this limb equal to zero?
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Return `b` if `choice` is truthy, `a` otherwise.
    #[inline]
    #[must_use]
    pub fn select(a: Self, b: Self, choice: Choice) -> Self {
        Self::conditional_select(&a, &b, choice)
    }

    /// Convert the least significant bit of this limb to a [`Choice`].
    ///
    /// The remaining bits must be zero.
    #[inline]
    pub(crate) fn lsb_to_choice(self) -> Choice {
        debug_assert!(self.0 <= 1);
        Choice::from(self.0 as u8)
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Word::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConstantTimeGreater for Limb {
    #[inline]
    fn ct_gt(&self, other: &Self) -> Choice {
        self.0.ct_gt(&other.0)
    }
}

impl ConstantTimeLess for Limb {
    #[inline]
    fn ct_lt(&self, other: &Self) -> Choice {
        self.0.ct_lt(&other.0)
    }
}

impl Eq for Limb {}

impl PartialEq for Limb {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Ord for Limb {
    /// This operation is variable-time; it exists to support containers and
    /// tests, not secret comparisons.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Limb {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
