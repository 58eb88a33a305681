use super::UintRef;
use crate::Limb;

impl UintRef {
    /// Subtract `rhs` from `self` in place, modulo `base^nlimbs`, returning
    /// the borrow out of the most significant limb: 1 if `self < rhs` as
    /// unsigned integers (i.e. the difference wrapped), 0 otherwise.
    ///
    /// `self` and `rhs` must have the same number of limbs.
    #[inline]
    pub fn borrowing_sub_assign(&mut self, rhs: &Self) -> Limb {
        debug_assert_eq!(self.nlimbs(), rhs.nlimbs(), "length mismatch");
        let mut borrow = Limb::ZERO;
        let mut i = 0;

        while i < self.0.len() {
            (self.0[i], borrow) = self.0[i].borrowing_sub(rhs.0[i], borrow);
            i += 1;
        }

        borrow
    }
}

#[cfg(test)]
mod tests {
    use super::UintRef;
    use crate::Limb;
    use subtle::Choice;

    #[test]
    fn no_borrow() {
        let mut a = [Limb(5), Limb(9)];
        let borrow = UintRef::new_mut(&mut a).borrowing_sub_assign(UintRef::new(&[Limb(7), Limb(3)]));
        assert_eq!(borrow, Limb::ZERO);
        assert_eq!(a, [Limb::MAX.wrapping_sub(Limb(1)), Limb(5)]);
    }

    #[test]
    fn borrow_iff_less() {
        let mut a = [Limb(5), Limb(3)];
        let borrow = UintRef::new_mut(&mut a).borrowing_sub_assign(UintRef::new(&[Limb(7), Limb(3)]));
        assert_eq!(borrow, Limb::ONE);
    }

    #[test]
    fn sub_then_add_reconstructs() {
        let original = [Limb(0xdead), Limb(0xbeef)];
        let rhs = [Limb(0x1234), Limb(0x0b0b)];
        let mut a = original;
        let borrow = UintRef::new_mut(&mut a).borrowing_sub_assign(UintRef::new(&rhs));
        assert_eq!(borrow, Limb::ZERO);
        UintRef::new_mut(&mut a).conditional_add_assign(UintRef::new(&rhs), Choice::from(1));
        assert_eq!(a, original);
    }
}
