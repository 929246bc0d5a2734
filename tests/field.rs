use secp256k1_commitment::primitives::U256;
use secp256k1_commitment::secp256k1::{FIELD_PRIME, FieldElement};

use proptest::prelude::*;

fn fe(hex: &str) -> FieldElement {
    FieldElement::from_be_hex(hex)
}

/// `p - v` for small `v`.
fn neg_small(v: u64) -> FieldElement {
    FieldElement::from_u256(FIELD_PRIME - U256::from(v)).unwrap()
}

#[test]
fn field_rejects_non_canonical_values() {
    assert!(FieldElement::from_u256(FIELD_PRIME).is_none());
    assert!(FieldElement::from_u256(U256::MAX).is_none());

    let p_minus_1 = FieldElement::from_u256(FIELD_PRIME - U256::ONE).unwrap();
    assert_eq!(p_minus_1 + FieldElement::ONE, FieldElement::ZERO);
}

#[test]
fn field_add_sub_wrap_around() {
    let a = neg_small(5);
    let b = FieldElement::from_u64(9);

    assert_eq!(a + b, FieldElement::from_u64(4));
    assert_eq!(FieldElement::from_u64(4) - b, a);
    assert_eq!(-FieldElement::from_u64(5), a);
    assert_eq!(-FieldElement::ZERO, FieldElement::ZERO);
}

#[test]
fn field_mul_reduces_large_products() {
    let minus_one = neg_small(1);

    assert_eq!(minus_one * minus_one, FieldElement::ONE);
    assert_eq!(minus_one * FieldElement::from_u64(7), neg_small(7));
    assert_eq!(neg_small(2).square(), FieldElement::from_u64(4));
}

#[test]
fn field_inversion_vectors() {
    let inv2 = fe("7fffffffffffffffffffffffffffffffffffffffffffffffffffffff7ffffe18");
    let inv3 = fe("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa9fffffd75");

    assert_eq!(FieldElement::ONE.invert(), FieldElement::ONE);
    assert_eq!(FieldElement::from_u64(2).invert(), inv2);
    assert_eq!(FieldElement::from_u64(3).invert(), inv3);
    assert_eq!(inv2.invert(), FieldElement::from_u64(2));
    assert_eq!(inv3.invert(), FieldElement::from_u64(3));
}

#[test]
fn field_inverse_of_zero_is_zero() {
    assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
}

#[test]
fn field_sqrt_vectors() {
    assert_eq!(FieldElement::ONE.sqrt(), FieldElement::ONE);
    assert_eq!(FieldElement::from_u64(4).sqrt(), FieldElement::from_u64(2));
    assert_eq!(
        FieldElement::from_u64(2).sqrt(),
        fe("210c790573632359b1edb4302c117d8a132654692c3feeb7de3a86ac3f3b53f7")
    );

    // Either root may come back.
    assert_eq!(FieldElement::from_u64(9).sqrt(), neg_small(3));
    assert_eq!(FieldElement::from_u64(49).sqrt(), neg_small(7));
}

#[test]
fn field_sqrt_of_non_residue_does_not_square_back() {
    // 5³ + 7 = 132 has no square root modulo p.
    let v = FieldElement::from_u64(132);
    assert_ne!(v.sqrt().square(), v);
}

#[test]
fn field_pow_small_exponents() {
    let three = FieldElement::from_u64(3);

    assert_eq!(three.pow(&U256::ZERO), FieldElement::ONE);
    assert_eq!(three.pow(&U256::ONE), three);
    assert_eq!(three.pow(&U256::from(5u64)), FieldElement::from_u64(243));
}

#[test]
fn field_bytes_and_parity() {
    let v = FieldElement::from_u64(0x0102);
    let bytes = v.to_be_bytes();

    assert_eq!(bytes[30], 0x01);
    assert_eq!(bytes[31], 0x02);
    assert!(!v.is_odd());
    assert!(neg_small(0x0102).is_odd());
    assert_eq!(v.to_u256(), U256::from(0x0102u64));
}

fn field_element() -> impl Strategy<Value = FieldElement> {
    any::<[u8; 32]>().prop_filter_map("value not below p", |bytes| {
        FieldElement::from_u256(U256::from(bytes))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn field_inverse_is_an_involution(x in field_element()) {
        prop_assume!(!x.is_zero());

        prop_assert_eq!(x.invert().invert(), x);
        prop_assert_eq!(x * x.invert(), FieldElement::ONE);
    }

    #[test]
    fn field_sqrt_of_square_is_a_root(x in field_element()) {
        let square = x.square();
        let root = square.sqrt();

        prop_assert_eq!(root.square(), square);
        prop_assert!(root == x || root == -x);
    }

    #[test]
    fn field_distributes(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!((a - b) + b, a);
    }
}
