use super::Limb;

impl Limb {
    /// Calculate the number of leading zeros in the binary representation of
    /// this number.
    ///
    /// Returns [`Limb::BITS`] for the value zero.
    #[inline(always)]
    #[must_use]
    pub const fn leading_zeros(self) -> u32 {
        self.0.leading_zeros()
    }

    /// Calculate the number of bits needed to represent this number.
    #[inline(always)]
    #[must_use]
    pub const fn bits(self) -> u32 {
        Limb::BITS - self.0.leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn leading_zeros() {
        assert_eq!(Limb::ZERO.leading_zeros(), Limb::BITS);
        assert_eq!(Limb::ONE.leading_zeros(), Limb::BITS - 1);
        assert_eq!(Limb::MAX.leading_zeros(), 0);
    }

    #[test]
    fn bits() {
        assert_eq!(Limb::ZERO.bits(), 0);
        assert_eq!(Limb::ONE.bits(), 1);
        assert_eq!(Limb(0b10110).bits(), 5);
        assert_eq!(Limb::MAX.bits(), Limb::BITS);
    }
}
