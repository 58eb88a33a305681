//! Byte-string import and export.
//!
//! These four operations are the only external format the crate defines:
//! unsigned big-endian or little-endian byte strings of any length, mapped
//! losslessly onto fixed-limb-count buffers. The limb width and host
//! endianness are implementation details of the internal representation and
//! never leak into the byte strings.

use super::UintRef;
use crate::{BufferTooSmall, Limb, Word};

impl UintRef {
    /// Convert limbs whose contents were loaded from a limb-aligned
    /// big-endian byte image into host limb order, in place.
    ///
    /// Used for buffers already sized to whole limbs; no allocation, no
    /// length change.
    pub fn from_be_in_place(&mut self) {
        self.0.reverse();
        for limb in self.0.iter_mut() {
            *limb = Limb(Word::from_be(limb.0));
        }
    }

    /// Import from an unsigned little-endian byte string.
    ///
    /// Fails with [`BufferTooSmall`] unless `self` has enough limbs to store
    /// every input byte, leading zero bytes included. Limbs beyond the input
    /// length are zero-filled.
    pub fn copy_from_le_slice(&mut self, input: &[u8]) -> Result<(), BufferTooSmall> {
        if self.nlimbs() < input.len().div_ceil(Limb::BYTES) {
            return Err(BufferTooSmall);
        }

        self.set_zero();
        for (chunk, limb) in input.chunks(Limb::BYTES).zip(self.0.iter_mut()) {
            *limb = Limb::from_le_slice(chunk);
        }
        Ok(())
    }

    /// Import from an unsigned big-endian byte string.
    ///
    /// Fails with [`BufferTooSmall`] unless `self` has enough limbs to store
    /// every input byte, leading zero bytes included. Limbs beyond the input
    /// length are zero-filled.
    pub fn copy_from_be_slice(&mut self, input: &[u8]) -> Result<(), BufferTooSmall> {
        if self.nlimbs() < input.len().div_ceil(Limb::BYTES) {
            return Err(BufferTooSmall);
        }

        self.set_zero();
        for (chunk, limb) in input.rchunks(Limb::BYTES).zip(self.0.iter_mut()) {
            *limb = Limb::from_be_slice(chunk);
        }
        Ok(())
    }

    /// Export as an unsigned little-endian byte string.
    ///
    /// The output may be shorter than the natural size of `self`; the export
    /// still succeeds as long as every truncated byte is zero, i.e. the
    /// *value* fits. Output beyond the natural size is zero-padded. Fails
    /// with [`BufferTooSmall`] only if truncation would drop a nonzero byte,
    /// in which case the output is left unmodified.
    pub fn copy_to_le_slice(&self, output: &mut [u8]) -> Result<(), BufferTooSmall> {
        self.check_truncation(output.len())?;

        let stored_bytes = self.nlimbs() * Limb::BYTES;
        for (i, out) in output.iter_mut().enumerate() {
            *out = if i < stored_bytes { self.byte(i) } else { 0 };
        }
        Ok(())
    }

    /// Export as an unsigned big-endian byte string.
    ///
    /// Same truncation-tolerant contract as [`Self::copy_to_le_slice`].
    pub fn copy_to_be_slice(&self, output: &mut [u8]) -> Result<(), BufferTooSmall> {
        self.check_truncation(output.len())?;

        let stored_bytes = self.nlimbs() * Limb::BYTES;
        let output_len = output.len();
        for (i, out) in output.iter_mut().enumerate() {
            let pos = output_len - 1 - i;
            *out = if pos < stored_bytes { self.byte(pos) } else { 0 };
        }
        Ok(())
    }

    /// Check that every byte of `self` at or beyond `output_len` is zero.
    fn check_truncation(&self, output_len: usize) -> Result<(), BufferTooSmall> {
        let stored_bytes = self.nlimbs() * Limb::BYTES;
        for i in output_len..stored_bytes {
            if self.byte(i) != 0 {
                return Err(BufferTooSmall);
            }
        }
        Ok(())
    }
}
