//! Montgomery multiplication tests against `num_bigint::BigUint`.

mod common;

use common::{to_biguint, to_uint};
use bignum_core::{
    Limb, Odd, U256, UintRef, Word,
    montgomery::{mod_neg_inv, montgomery_mul},
};
use num_bigint::BigUint;
use proptest::prelude::*;

const LIMBS: usize = U256::LIMBS;

prop_compose! {
    /// Odd 256-bit modulus with the high bit set.
    fn modulus()(mut bytes in any::<[u8; 32]>()) -> U256 {
        bytes[0] |= 1;
        bytes[31] |= 0x80;
        U256::from_le_slice(&bytes).unwrap()
    }
}

prop_compose! {
    fn uint()(bytes in any::<[u8; 32]>()) -> U256 {
        U256::from_le_slice(&bytes).unwrap()
    }
}

/// `X = montgomery_mul(a, b, n)` satisfies `X * R ≡ a * b (mod n)` where
/// `R = 2^256`, so checking against `BigUint` needs no modular inversion.
fn check_montgomery_product(a: &UintRef, b: &UintRef, n: &U256) -> BigUint {
    let mm = mod_neg_inv(n.as_limbs()[0]);
    let mut scratch = vec![Limb::ZERO; 2 * LIMBS + 1];
    let mut x = U256::ZERO;

    montgomery_mul(
        x.as_mut_uint_ref(),
        a,
        b,
        n.as_uint_ref(),
        mm,
        &mut scratch,
    );

    let n = to_biguint(n);
    let lhs = (to_biguint(&x) << U256::BITS) % &n;
    let rhs = (to_biguint(&a) * to_biguint(&b)) % &n;
    assert_eq!(lhs, rhs);
    assert!(to_biguint(&x) < n);

    to_biguint(&x)
}

proptest! {
    #[test]
    fn neg_inverse(w in any::<Word>()) {
        let n0 = Limb(w | 1);
        let mm = mod_neg_inv(n0);
        // n0 * mm ≡ -1 (mod 2^BITS)
        prop_assert_eq!(n0.wrapping_mul(mm), Limb::MAX);
    }

    #[test]
    fn product_is_reduced(a in uint(), b in uint(), n in modulus()) {
        let a = to_uint::<LIMBS>(&(to_biguint(&a) % to_biguint(&n)));
        let b = to_uint::<LIMBS>(&(to_biguint(&b) % to_biguint(&n)));
        check_montgomery_product(a.as_uint_ref(), b.as_uint_ref(), &n);
    }

    #[test]
    fn narrow_second_operand(a in uint(), b0 in any::<Word>(), n in modulus()) {
        let a = to_uint::<LIMBS>(&(to_biguint(&a) % to_biguint(&n)));
        let b = [Limb(b0)];
        check_montgomery_product(a.as_uint_ref(), UintRef::new(&b), &n);
    }

    #[test]
    fn fixed_width_form(a in uint(), b in uint(), n in modulus()) {
        let n_odd = Odd::new(n).unwrap();
        let a = to_uint::<LIMBS>(&(to_biguint(&a) % to_biguint(&n)));
        let b = to_uint::<LIMBS>(&(to_biguint(&b) % to_biguint(&n)));
        let mut scratch = vec![Limb::ZERO; 2 * LIMBS + 1];

        let x = n_odd.montgomery_mul(&a, &b, &mut scratch);

        let n_big = to_biguint(&n);
        let lhs = (to_biguint(&x) << U256::BITS) % &n_big;
        let rhs = (to_biguint(&a) * to_biguint(&b)) % &n_big;
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn multiplying_by_one_converts_out(a in uint(), n in modulus()) {
        // Montgomery-multiplying by plain 1 divides by R mod n, so feeding
        // in a * R mod n recovers a exactly.
        let n_big = to_biguint(&n);
        let a_big = to_biguint(&a) % &n_big;
        let a_mont = to_uint::<LIMBS>(&((&a_big << U256::BITS) % &n_big));
        let one = [Limb::ONE];
        let x = check_montgomery_product(a_mont.as_uint_ref(), UintRef::new(&one), &n);

        prop_assert_eq!(x, a_big);
    }
}
