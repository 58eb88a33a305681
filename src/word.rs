//! `Word` is the native unsigned integer a [`Limb`][`crate::Limb`] wraps,
//! typically the same size as a pointer on the target CPU.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("this crate builds on 32-bit and 64-bit platforms only");

/// 32-bit definitions
#[cfg(target_pointer_width = "32")]
mod word32 {
    /// Unsigned integer type that the [`Limb`][`crate::Limb`] newtype wraps.
    pub type Word = u32;

    /// Wide unsigned integer type: double the width of [`Word`].
    pub type WideWord = u64;
}

/// 64-bit definitions
#[cfg(target_pointer_width = "64")]
mod word64 {
    /// Unsigned integer type that the [`Limb`][`crate::Limb`] newtype wraps.
    pub type Word = u64;

    /// Wide unsigned integer type: double the width of [`Word`].
    pub type WideWord = u128;
}

#[cfg(target_pointer_width = "32")]
pub use word32::*;
#[cfg(target_pointer_width = "64")]
pub use word64::*;
