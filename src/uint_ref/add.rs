use super::UintRef;
use crate::Limb;
use subtle::Choice;

impl UintRef {
    /// Conditionally add `rhs` into `self` in place: `self += choice ? rhs : 0`,
    /// fixed width, returning the carry out of the most significant limb
    /// (1 if the true sum overflows the width, 0 otherwise).
    ///
    /// The addition is performed by masking each limb of `rhs` rather than
    /// branching, so the executed instructions and memory accesses do not
    /// depend on `choice`. This is a correctness requirement, not a style
    /// choice: `choice` frequently derives from secret data.
    ///
    /// `self` and `rhs` must have the same number of limbs.
    #[inline]
    pub fn conditional_add_assign(&mut self, rhs: &Self, choice: Choice) -> Limb {
        debug_assert_eq!(self.nlimbs(), rhs.nlimbs(), "length mismatch");
        let mut carry = Limb::ZERO;
        let mut i = 0;

        while i < self.0.len() {
            let addend = Limb::select(Limb::ZERO, rhs.0[i], choice);
            (self.0[i], carry) = self.0[i].carrying_add(addend, carry);
            i += 1;
        }

        carry
    }
}
