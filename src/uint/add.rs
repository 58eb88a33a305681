//! [`Uint`] addition operations.

use super::Uint;
use crate::Limb;
use subtle::Choice;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Conditionally add `rhs` into `self` in place, returning the carry out
    /// of the most significant limb.
    ///
    /// See [`UintRef::conditional_add_assign`][`crate::UintRef::conditional_add_assign`]
    /// for the constant-time contract.
    #[inline]
    pub fn conditional_add_assign(&mut self, rhs: &Self, choice: Choice) -> Limb {
        self.as_mut_uint_ref()
            .conditional_add_assign(rhs.as_uint_ref(), choice)
    }
}
