//! Limb encoding

use super::{Limb, Word};

impl Limb {
    /// Serialize this limb in big-endian byte order.
    #[inline]
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; Self::BYTES] {
        self.0.to_be_bytes()
    }

    /// Serialize this limb in little-endian byte order.
    #[inline]
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
        self.0.to_le_bytes()
    }

    /// Decode a limb from a big-endian byte slice of up to [`Limb::BYTES`]
    /// bytes, zero-padding the missing high-order bytes.
    ///
    /// Panics if the slice is longer than [`Limb::BYTES`].
    pub(crate) fn from_be_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= Self::BYTES, "slice too long for a limb");
        let mut buf = [0u8; Self::BYTES];
        buf[Self::BYTES - bytes.len()..].copy_from_slice(bytes);
        Limb(Word::from_be_bytes(buf))
    }

    /// Decode a limb from a little-endian byte slice of up to [`Limb::BYTES`]
    /// bytes, zero-padding the missing high-order bytes.
    ///
    /// Panics if the slice is longer than [`Limb::BYTES`].
    pub(crate) fn from_le_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= Self::BYTES, "slice too long for a limb");
        let mut buf = [0u8; Self::BYTES];
        buf[..bytes.len()].copy_from_slice(bytes);
        Limb(Word::from_le_bytes(buf))
    }
}
