use super::UintRef;
use crate::Limb;

impl UintRef {
    /// Multiply-accumulate: `self += c * rhs`, in place, returning the carry
    /// out of the most significant limb of `self`.
    ///
    /// `self` must have at least as many limbs as `rhs`; the carry from the
    /// product is propagated through the remaining high limbs of `self`.
    #[inline]
    pub fn carrying_mul_add_assign(&mut self, rhs: &Self, c: Limb) -> Limb {
        debug_assert!(self.nlimbs() >= rhs.nlimbs(), "accumulator too short");
        let mut carry = Limb::ZERO;
        let mut i = 0;

        while i < rhs.0.len() {
            (self.0[i], carry) = self.0[i].carrying_mul_add(rhs.0[i], c, carry);
            i += 1;
        }
        while i < self.0.len() {
            (self.0[i], carry) = self.0[i].carrying_add(carry, Limb::ZERO);
            i += 1;
        }

        carry
    }

    /// Multiply-accumulate of an integer onto itself: `self += c * self`,
    /// returning the final carry.
    ///
    /// This is the one aliasing case of multiply-accumulate that the borrow
    /// system cannot express through [`Self::carrying_mul_add_assign`].
    #[inline]
    pub fn carrying_mul_add_assign_self(&mut self, c: Limb) -> Limb {
        let mut carry = Limb::ZERO;
        let mut i = 0;

        // Each step reads limb `i` before overwriting it, so the aliasing is benign.
        while i < self.0.len() {
            (self.0[i], carry) = self.0[i].carrying_mul_add(self.0[i], c, carry);
            i += 1;
        }

        carry
    }
}
