use super::UintRef;
use crate::Limb;

impl UintRef {
    /// Calculate the number of bits needed to represent this number, i.e. the
    /// position of the highest set bit plus one. Returns 0 for an all-zero
    /// input of any length, including zero limbs.
    ///
    /// Variable-time in the position of the most significant nonzero limb,
    /// which is acceptable for the sizing queries this serves; do not use it
    /// to compare secret values.
    #[must_use]
    pub const fn bits_vartime(&self) -> u32 {
        let mut i = self.0.len();
        while i > 0 && self.0[i - 1].0 == 0 {
            i -= 1;
        }

        if i == 0 {
            0
        } else {
            i as u32 * Limb::BITS - self.0[i - 1].leading_zeros()
        }
    }
}
