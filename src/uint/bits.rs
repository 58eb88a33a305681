use super::Uint;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Calculate the number of bits needed to represent this number, in
    /// variable time with respect to `self`.
    #[inline]
    pub const fn bits_vartime(&self) -> u32 {
        self.as_uint_ref().bits_vartime()
    }
}
