//! Montgomery multiplication.
//!
//! Montgomery form represents an integer `a` modulo an odd `N` as
//! `a * R mod N` with `R = base^limbs`, which lets modular multiplication be
//! performed with shifts and multiply-accumulates instead of division-based
//! reduction. This module provides the two primitives everything else is
//! derived from: the per-modulus constant `mm = -N^-1 mod base` and the
//! interleaved multiplication/reduction of HAC 14.36.

use crate::{Limb, Odd, Uint, UintRef, Word};
use subtle::Choice;

/// Compute the Montgomery constant `mm = -N^-1 mod base` from the least
/// significant limb of the modulus.
///
/// `n0` must be odd; the inverse modulo a power of two does not exist
/// otherwise.
pub const fn mod_neg_inv(n0: Limb) -> Limb {
    debug_assert!(n0.0 & 1 == 1, "modulus must be odd");

    // Hensel lifting: for odd n, x = n satisfies n*x == 1 (mod 2^3), and
    // every Newton step x <- x * (2 - n*x) doubles the number of correct
    // low-order bits.
    let n = n0.0;
    let mut inv = n;
    let mut correct_bits = 3;
    while correct_bits < Limb::BITS {
        inv = inv.wrapping_mul((2 as Word).wrapping_sub(n.wrapping_mul(inv)));
        correct_bits *= 2;
    }

    Limb(inv.wrapping_neg())
}

/// Montgomery multiplication: `x = a * b * R^-1 mod n` (HAC 14.36), where
/// `R = base^limbs` for the shared limb count of `x`, `a` and `n`.
///
/// - `x`, `a` and `n` must all have the same limb count; `n` must be odd and
///   tight (nonzero most significant limb).
/// - `b` may be shorter than `a` (its missing high limbs are treated as
///   zero), but not longer.
/// - `mm` is the Montgomery constant for `n`, from [`mod_neg_inv`].
/// - `t` is caller-supplied working storage of at least `2 * limbs + 1`
///   limbs. Its initial contents are ignored and its final contents are
///   unspecified; callers holding key material should wipe it themselves.
///
/// The output is fully reduced into `[0, n)`. The final reduction subtracts
/// `n` unconditionally and adds it back under a mask derived from the carry
/// and borrow bits, so no secret-dependent branch decides whether the result
/// exceeded the modulus.
pub fn montgomery_mul(
    x: &mut UintRef,
    a: &UintRef,
    b: &UintRef,
    n: &UintRef,
    mm: Limb,
    t: &mut [Limb],
) {
    let limbs = n.nlimbs();
    debug_assert_eq!(x.nlimbs(), limbs, "output length mismatch");
    debug_assert_eq!(a.nlimbs(), limbs, "operand length mismatch");
    debug_assert!(b.nlimbs() <= limbs, "second operand too long");
    debug_assert!(t.len() >= 2 * limbs + 1, "scratch too short");
    debug_assert!(limbs == 0 || n.0[0].0 & 1 == 1, "modulus must be odd");

    let t = &mut t[..2 * limbs + 1];
    t.fill(Limb::ZERO);

    let b0 = if b.nlimbs() == 0 { Limb::ZERO } else { b.0[0] };

    for i in 0..limbs {
        // T = (T + u0*B + u1*N) / base, the division being the one-limb
        // shift of the accumulation window. u1 is chosen so that the low
        // limb of the window is zero after both accumulations.
        let u0 = a.0[i];
        let u1 = t[i].wrapping_add(u0.wrapping_mul(b0)).wrapping_mul(mm);

        let window = UintRef::new_mut(&mut t[i..i + limbs + 2]);
        window.carrying_mul_add_assign(b, u0);
        window.carrying_mul_add_assign(n, u1);
    }

    // At this point the accumulated value is T = carry*R + T_hi < 2*N.
    // Subtract N unconditionally; if that wrapped and the carry did not
    // cancel it, the value was already below N, so add N back.
    let carry = t[2 * limbs];
    x.copy_from(UintRef::new(&t[limbs..2 * limbs]));
    let borrow = x.borrowing_sub_assign(n);
    x.conditional_add_assign(n, Choice::from((carry.0 ^ borrow.0) as u8));
}

impl<const LIMBS: usize> Odd<Uint<LIMBS>> {
    /// Compute the Montgomery constant `mm = -self^-1 mod base`; see
    /// [`mod_neg_inv`]. The [`Odd`] wrapper guarantees it exists.
    pub const fn mod_neg_inv(&self) -> Limb {
        mod_neg_inv(self.as_ref().as_limbs()[0])
    }

    /// Fixed-width Montgomery multiplication modulo `self`; see
    /// [`montgomery_mul`].
    ///
    /// `scratch` must hold at least `2 * LIMBS + 1` limbs.
    pub fn montgomery_mul(
        &self,
        a: &Uint<LIMBS>,
        b: &Uint<LIMBS>,
        scratch: &mut [Limb],
    ) -> Uint<LIMBS> {
        let mut x = Uint::ZERO;
        montgomery_mul(
            x.as_mut_uint_ref(),
            a.as_uint_ref(),
            b.as_uint_ref(),
            self.as_ref().as_uint_ref(),
            self.mod_neg_inv(),
            scratch,
        );
        x
    }
}
