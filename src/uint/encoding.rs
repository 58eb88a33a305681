//! Decoding/encoding operations for [`Uint`].

use super::Uint;
use crate::{BufferTooSmall, Limb, Word};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Decode from an unsigned big-endian byte string of any length that
    /// fits; see [`UintRef::copy_from_be_slice`][`crate::UintRef::copy_from_be_slice`].
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, BufferTooSmall> {
        let mut ret = Self::ZERO;
        ret.as_mut_uint_ref().copy_from_be_slice(bytes)?;
        Ok(ret)
    }

    /// Decode from an unsigned little-endian byte string of any length that
    /// fits; see [`UintRef::copy_from_le_slice`][`crate::UintRef::copy_from_le_slice`].
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self, BufferTooSmall> {
        let mut ret = Self::ZERO;
        ret.as_mut_uint_ref().copy_from_le_slice(bytes)?;
        Ok(ret)
    }

    /// Serialize as unsigned big-endian bytes, with the truncation-tolerant
    /// contract of [`UintRef::copy_to_be_slice`][`crate::UintRef::copy_to_be_slice`].
    pub fn copy_to_be_slice(&self, output: &mut [u8]) -> Result<(), BufferTooSmall> {
        self.as_uint_ref().copy_to_be_slice(output)
    }

    /// Serialize as unsigned little-endian bytes, with the truncation-tolerant
    /// contract of [`UintRef::copy_to_le_slice`][`crate::UintRef::copy_to_le_slice`].
    pub fn copy_to_le_slice(&self, output: &mut [u8]) -> Result<(), BufferTooSmall> {
        self.as_uint_ref().copy_to_le_slice(output)
    }

    /// Create a new [`Uint`] from the provided big-endian hex string.
    ///
    /// Panics if the hex is malformed or not zero-padded accordingly for the
    /// size. Intended for constants and test vectors.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();

        assert!(
            bytes.len() == Limb::BYTES * LIMBS * 2,
            "hex string is not the expected size"
        );

        let mut res = [Limb::ZERO; LIMBS];
        let mut buf = [0u8; Limb::BYTES];
        let mut i = 0;
        let mut err = 0;

        while i < LIMBS {
            let mut j = 0;
            while j < Limb::BYTES {
                let offset = (i * Limb::BYTES + j) * 2;
                let (result, byte_err) = decode_hex_byte([bytes[offset], bytes[offset + 1]]);
                err |= byte_err;
                buf[j] = result;
                j += 1;
            }
            res[LIMBS - i - 1] = Limb(Word::from_be_bytes(buf));
            i += 1;
        }

        assert!(err == 0, "invalid hex byte");

        Uint::new(res)
    }
}

/// Decode a single nibble of upper or lower hex.
const fn decode_nibble(src: u8) -> u16 {
    let byte = src as i16;
    let mut ret: i16 = -1;

    // 0-9  0x30-0x39
    // if (byte > 0x2f && byte < 0x3a) ret += byte - 0x30 + 1; // -47
    ret += (((0x2fi16 - byte) & (byte - 0x3a)) >> 8) & (byte - 47);
    // A-F  0x41-0x46
    // if (byte > 0x40 && byte < 0x47) ret += byte - 0x41 + 10 + 1; // -54
    ret += (((0x40i16 - byte) & (byte - 0x47)) >> 8) & (byte - 54);
    // a-f  0x61-0x66
    // if (byte > 0x60 && byte < 0x67) ret += byte - 0x61 + 10 + 1; // -86
    ret += (((0x60i16 - byte) & (byte - 0x67)) >> 8) & (byte - 86);

    ret as u16
}

/// Decode a single byte encoded as two hexadecimal characters.
/// Second element of the tuple is non-zero if the `bytes` values are not in
/// the valid range (0-9, a-f, A-F).
#[inline(always)]
const fn decode_hex_byte(bytes: [u8; 2]) -> (u8, u16) {
    let hi = decode_nibble(bytes[0]);
    let lo = decode_nibble(bytes[1]);
    let byte = (hi << 4) | lo;
    let err = byte >> 8;
    let result = byte as u8;
    (result, err)
}

#[cfg(test)]
mod tests {
    use crate::{BufferTooSmall, Limb, U128, Uint};
    use hex_literal::hex;

    #[test]
    fn be_slice_roundtrip() {
        let bytes = hex!("112233445566778899aabbccddeeff00");
        let x = U128::from_be_slice(&bytes).unwrap();
        let mut out = [0u8; 16];
        x.copy_to_be_slice(&mut out).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn le_slice_roundtrip() {
        let bytes = hex!("112233445566778899aabbccddeeff00");
        let x = U128::from_le_slice(&bytes).unwrap();
        let mut out = [0u8; 16];
        x.copy_to_le_slice(&mut out).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn short_input_is_zero_extended() {
        let x = U128::from_be_slice(&[0x12]).unwrap();
        assert_eq!(x, U128::from_u64(0x12));
    }

    #[test]
    fn oversized_input_is_rejected() {
        let bytes = [0u8; 17];
        assert_eq!(U128::from_be_slice(&bytes), Err(BufferTooSmall));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn from_be_hex() {
        let x = Uint::<2>::from_be_hex("00000000000000010000000000000002");
        assert_eq!(x.as_limbs(), &[Limb(2), Limb(1)]);
    }
}
