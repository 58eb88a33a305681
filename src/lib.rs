//! Pure Rust implementation of the limb-level core of a big integer library
//! designed for cryptography.
//!
//! # About
//! This library provides constant-time, `no_std`-friendly implementations of
//! the arithmetic primitives that modular cryptographic arithmetic is built
//! from: limb vectors in little-endian order, carry/borrow-propagating
//! addition and subtraction, multiply-accumulate, byte-string conversions,
//! and Montgomery multiplication.
//!
//! All operations whose operands may be secret take a code path that does not
//! branch or index memory based on their values. Operations that are
//! deliberately variable-time carry a `vartime` suffix.
//!
//! # Representation
//! Big integers are vectors of [`Limb`]s stored least-significant limb first.
//! [`UintRef`] wraps a limb slice whose length is its limb count, and
//! [`Uint`] fixes that length as a const generic parameter so widths are
//! checked at compile time.
//!
//! # Minimum Supported Rust Version
//! **Rust 1.85** at a minimum.

#![no_std]
#![deny(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(test)]
extern crate std;

mod error;
mod limb;
pub mod montgomery;
mod odd;
mod primitives;
mod uint;
mod uint_ref;
mod word;

pub use crate::{
    error::BufferTooSmall,
    limb::{Limb, nlimbs},
    odd::Odd,
    uint::{U64, U128, U256, U512, U1024, Uint},
    uint_ref::UintRef,
    word::{WideWord, Word},
};

pub use subtle;
