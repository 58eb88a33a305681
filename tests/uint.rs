//! Equivalence tests between `bignum_core::Uint` and `num_bigint::BigUint`.

mod common;

use common::{to_biguint, to_uint};
use bignum_core::{Limb, U256, Word, subtle::Choice};
use num_bigint::BigUint;
use num_traits::identities::Zero;
use proptest::prelude::*;

prop_compose! {
    fn uint()(bytes in any::<[u8; 32]>()) -> U256 {
        U256::from_le_slice(&bytes).unwrap()
    }
}

proptest! {
    #[test]
    fn roundtrip(a in uint()) {
        prop_assert_eq!(a, to_uint(&to_biguint(&a)));
    }

    #[test]
    fn be_encoding_roundtrip(a in uint()) {
        let mut bytes = [0u8; U256::BYTES];
        a.copy_to_be_slice(&mut bytes).unwrap();
        prop_assert_eq!(a, U256::from_be_slice(&bytes).unwrap());
    }

    #[test]
    fn be_export_matches_reference(a in uint()) {
        let mut bytes = [0u8; U256::BYTES];
        a.copy_to_be_slice(&mut bytes).unwrap();

        let expected = to_biguint(&a).to_bytes_be();
        prop_assert_eq!(&bytes[U256::BYTES - expected.len()..], &expected[..]);
        prop_assert!(bytes[..U256::BYTES - expected.len()].iter().all(|&b| b == 0));
    }

    #[test]
    fn truncating_export(a in uint()) {
        // Exporting into a buffer exactly as long as the value succeeds;
        // one byte shorter fails unless the value is zero.
        let value = to_biguint(&a);
        let len = (value.bits() as usize).div_ceil(8);
        let mut bytes = vec![0u8; len];
        a.copy_to_be_slice(&mut bytes).unwrap();
        prop_assert_eq!(BigUint::from_bytes_be(&bytes), value.clone());

        if !value.is_zero() {
            let mut short = vec![0u8; len - 1];
            prop_assert!(a.copy_to_be_slice(&mut short).is_err());
        }
    }

    #[test]
    fn bits(a in uint()) {
        let expected = to_biguint(&a).bits() as u32;
        prop_assert_eq!(expected, a.bits_vartime());
    }

    #[test]
    fn conditional_add(mut a in uint(), b in uint()) {
        let expected = to_biguint(&a) + to_biguint(&b);
        let original = a;

        let carry = a.conditional_add_assign(&b, Choice::from(0));
        prop_assert_eq!(a, original);
        prop_assert_eq!(carry, Limb::ZERO);

        let carry = a.conditional_add_assign(&b, Choice::from(1));
        let mut actual = to_biguint(&a);
        actual += BigUint::from(carry.0) << U256::BITS;
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn borrowing_sub(mut a in uint(), b in uint()) {
        let (x, y) = (to_biguint(&a), to_biguint(&b));
        let borrow = a.borrowing_sub_assign(&b);

        if x >= y {
            prop_assert_eq!(borrow, Limb::ZERO);
            prop_assert_eq!(to_biguint(&a), x - y);
        } else {
            prop_assert_eq!(borrow, Limb::ONE);
            prop_assert_eq!(to_biguint(&a), (BigUint::from(1u8) << U256::BITS) + x - y);
        }
    }

    #[test]
    fn sub_then_add_roundtrips(a in uint(), b in uint()) {
        let mut x = a;
        let borrow = x.borrowing_sub_assign(&b);
        let carry = x.conditional_add_assign(&b, Choice::from(1));
        prop_assert_eq!(x, a);
        prop_assert_eq!(carry, borrow);
    }

    #[test]
    fn carrying_mul_add(mut a in uint(), b in uint(), c in any::<Word>()) {
        let expected = to_biguint(&a) + to_biguint(&b) * c;
        let carry = a.carrying_mul_add_assign(&b, Limb(c));

        let mut actual = to_biguint(&a);
        actual += BigUint::from(carry.0) << U256::BITS;
        prop_assert_eq!(actual, expected);
    }
}
