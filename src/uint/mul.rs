//! [`Uint`] multiplication operations.

use super::Uint;
use crate::Limb;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Multiply-accumulate: `self += c * rhs`, returning the carry out of the
    /// most significant limb.
    ///
    /// `rhs` may be narrower than `self`; the carry propagates through the
    /// remaining high limbs of `self`.
    #[inline]
    pub fn carrying_mul_add_assign<const RHS_LIMBS: usize>(
        &mut self,
        rhs: &Uint<RHS_LIMBS>,
        c: Limb,
    ) -> Limb {
        self.as_mut_uint_ref()
            .carrying_mul_add_assign(rhs.as_uint_ref(), c)
    }
}
