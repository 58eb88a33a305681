//! [`Uint`] subtraction operations.

use super::Uint;
use crate::Limb;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Subtract `rhs` from `self` in place modulo `base^LIMBS`, returning the
    /// borrow bit: 1 if `self < rhs` as unsigned integers, 0 otherwise.
    #[inline]
    pub fn borrowing_sub_assign(&mut self, rhs: &Self) -> Limb {
        self.as_mut_uint_ref()
            .borrowing_sub_assign(rhs.as_uint_ref())
    }
}
