//! Error types.

use core::fmt;

/// The destination buffer is too small to hold the value being transferred.
///
/// This is the only recoverable failure the crate reports. It is returned
/// from the byte-string import and export operations when:
///
/// - importing: the limb buffer has fewer limbs than needed to store every
///   input byte (leading zero bytes included), or
/// - exporting: truncating the value to the output length would drop a
///   nonzero byte.
///
/// Retrying with a correctly sized buffer always succeeds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BufferTooSmall;

impl fmt::Display for BufferTooSmall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("buffer too small to hold the represented value")
    }
}

impl core::error::Error for BufferTooSmall {}
