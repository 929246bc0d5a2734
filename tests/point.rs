use secp256k1_commitment::primitives::U256;
use secp256k1_commitment::secp256k1::{
    CURVE_ORDER, FieldElement, GENERATOR, Point, Scalar, Secp256k1Error,
};

use hex_literal::hex;
use proptest::prelude::*;

fn point(x: &str, y: &str) -> Point {
    Point::from_affine(U256::from_be_hex(x), U256::from_be_hex(y)).unwrap()
}

// P chosen by dice roll, with 2P, -2P and 3P.
fn p1() -> Point {
    point(
        "394867ad93f5c9612e8d8b7600443334026e648e365337d799190e845d649e67",
        "0b84af9a00c1a55a7ac03917e59b21c68d1ffdf18720c3ad279077049cfaaf63",
    )
}

fn p2() -> Point {
    point(
        "8e6575f6c759aea04a8ec65f61f71eba237a0af54292d41e3a4bac2efa922dea",
        "2b3c07687787ff07ae312305f30481c451ae3b78d4f479a3b729615fedc040e4",
    )
}

fn np2() -> Point {
    point(
        "8e6575f6c759aea04a8ec65f61f71eba237a0af54292d41e3a4bac2efa922dea",
        "d4c3f897887800f851cedcfa0cfb7e3bae51c4872b0b865c48d69e9f123fbb4b",
    )
}

fn p3() -> Point {
    point(
        "53dd5e495c7404790f9347470cc9c38ee239809c758f02ec04ba641ab3d0e043",
        "d7a4f5e5bdf21000b1fe7216adbea92cb9917d8fea7b37628c1eddb409a5cd3f",
    )
}

#[test]
fn generator_encodes_to_known_bytes() {
    let encoded = GENERATOR.encode().unwrap();

    assert_eq!(
        encoded,
        hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
    );
    assert_eq!(Point::decode(&encoded).unwrap(), GENERATOR);
    assert!(GENERATOR.is_on_curve());
}

#[test]
fn odd_prefix_selects_the_negated_point() {
    let decoded = Point::decode(&hex!(
        "0379be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    ))
    .unwrap();

    assert_eq!(decoded, -GENERATOR);
    assert_eq!(
        decoded.coordinates().unwrap().1,
        FieldElement::from_be_hex("b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777")
    );
}

#[test]
fn encode_decode_round_trip() {
    for p in [p1(), p2(), np2(), p3(), -GENERATOR] {
        assert_eq!(Point::decode(&p.encode().unwrap()).unwrap(), p);
    }

    assert_eq!(p1().encode().unwrap()[0], 0x03);
    assert_eq!(p2().encode().unwrap()[0], 0x02);
}

#[test]
fn decode_rejects_bad_lengths_and_prefixes() {
    let good = GENERATOR.encode().unwrap();

    assert!(matches!(
        Point::decode(&good[..32]),
        Err(Secp256k1Error::InvalidEncoding(_))
    ));

    let mut long = good.to_vec();
    long.push(0);
    assert!(matches!(
        Point::decode(&long),
        Err(Secp256k1Error::InvalidEncoding(_))
    ));

    for prefix in [0x00, 0x01, 0x04, 0xFF] {
        let mut bad = good;
        bad[0] = prefix;
        assert!(matches!(
            Point::decode(&bad),
            Err(Secp256k1Error::InvalidEncoding(_))
        ));
    }
}

#[test]
fn decode_rejects_points_off_the_curve() {
    let out_of_range = hex!("02fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");
    assert!(matches!(
        Point::decode(&out_of_range),
        Err(Secp256k1Error::PointNotOnCurve(_))
    ));

    // 5³ + 7 is not a quadratic residue.
    let mut no_root = [0u8; 33];
    no_root[0] = 0x02;
    no_root[32] = 5;
    assert!(matches!(
        Point::decode(&no_root),
        Err(Secp256k1Error::PointNotOnCurve(_))
    ));
}

#[test]
fn from_affine_checks_curve_membership() {
    let (x, y) = GENERATOR.coordinates().unwrap();

    assert!(Point::from_affine(x.to_u256(), (y + FieldElement::ONE).to_u256()).is_err());
    assert!(Point::from_affine(CURVE_ORDER, y.to_u256()).is_err());
    assert_eq!(Point::from_affine(x.to_u256(), y.to_u256()).unwrap(), GENERATOR);
}

#[test]
fn infinity_has_no_encoding() {
    assert!(matches!(
        Point::Infinity.encode(),
        Err(Secp256k1Error::InvalidEncoding(_))
    ));
    assert!(Point::Infinity.x_bytes().is_err());
    assert!(Point::Infinity.is_on_curve());
}

#[test]
fn point_add_and_double() {
    let inf = Point::Infinity;

    assert_eq!(inf.add(&inf).unwrap(), inf);
    assert_eq!(p1().add(&inf).unwrap(), p1());
    assert_eq!(inf.add(&p1()).unwrap(), p1());
    assert_eq!(p1().add(&p1()).unwrap(), p2());
    assert_eq!(p1().double().unwrap(), p2());
    assert_eq!(p1().add(&p2()).unwrap(), p3());
    assert_eq!(p2().add(&p1()).unwrap(), p3());
    assert_eq!(p3().add(&np2()).unwrap(), p1());
    assert_eq!(np2().add(&p3()).unwrap(), p1());
    assert_eq!(p2().add(&np2()).unwrap(), inf);
    assert_eq!(np2().add(&p2()).unwrap(), inf);
    assert_eq!(-p2(), np2());
}

#[test]
fn point_add_is_associative_on_a_sample() {
    let p = p1();
    let pp = p.add(&p).unwrap();

    assert_eq!(pp.add(&p).unwrap(), p.add(&pp).unwrap());
}

#[test]
fn generator_multiples_match_reference_values() {
    let g2 = point(
        "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
    );
    let g3 = point(
        "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
    );

    assert_eq!(GENERATOR.double().unwrap(), g2);
    assert_eq!(GENERATOR.scalar_mul(&Scalar::from(3u64)).unwrap(), g3);
}

#[test]
fn mismatched_doubling_is_an_error() {
    let (x, y) = GENERATOR.coordinates().unwrap();
    let forged = Point::Affine {
        x,
        y: y + FieldElement::ONE,
    };

    assert!(matches!(
        GENERATOR.add(&forged),
        Err(Secp256k1Error::PointNotOnCurve(_))
    ));
}

#[test]
fn scalar_mul_vectors() {
    let inf = Point::Infinity;

    assert_eq!(inf.scalar_mul(&Scalar::ZERO).unwrap(), inf);
    assert_eq!(inf.scalar_mul(&Scalar::from(1000u64)).unwrap(), inf);
    assert_eq!(inf.scalar_mul(&Scalar::from(-1i64)).unwrap(), inf);

    assert_eq!(p1().scalar_mul(&Scalar::ZERO).unwrap(), inf);
    assert_eq!(p1().scalar_mul(&Scalar::ONE).unwrap(), p1());
    assert_eq!(p1().scalar_mul(&Scalar::from(2u64)).unwrap(), p2());
    assert_eq!(p1().scalar_mul(&Scalar::from(-2i64)).unwrap(), np2());
    assert_eq!(p2().scalar_mul(&Scalar::from(-1i64)).unwrap(), np2());
    assert_eq!(p1().scalar_mul(&Scalar::from(3u64)).unwrap(), p3());
}

#[test]
fn scalar_mul_large_scalar() {
    let n = Scalar::new(U256::from_be_hex(
        "a91ce154dcab9adabe08cc1ee84ec3cd0f426bbc08a54a1c41bd25f2587caedd",
    ));
    let pn = point(
        "9dc4b057a857ad2ef3535b4a207a7bfc9264e8fcacf718c895db7ead8d445b26",
        "5af110ecb68636e5c352b69fc6348173932b83ca64587a91fd88af1446e33979",
    );

    assert_eq!(p1().scalar_mul(&n).unwrap(), pn);
}

#[test]
fn scalar_mul_by_order_minus_one_negates() {
    let minus_one = Scalar::new(CURVE_ORDER - U256::ONE);

    assert_eq!(minus_one, Scalar::from(-1i64));
    assert_eq!(GENERATOR.scalar_mul(&minus_one).unwrap(), -GENERATOR);
}

#[test]
fn scalar_reduces_modulo_order() {
    assert_eq!(Scalar::new(CURVE_ORDER), Scalar::ZERO);
    assert_eq!(
        Scalar::from_be_bytes([0xFF; 32]).to_u256(),
        U256::MAX - CURVE_ORDER
    );
    assert_eq!(-Scalar::ZERO, Scalar::ZERO);
    assert_eq!(-(-Scalar::from(5u64)), Scalar::from(5u64));
}

#[test]
fn point_display() {
    assert_eq!(Point::Infinity.to_string(), "Point(infinity)");
    assert_eq!(
        GENERATOR.to_string(),
        "Point(79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798, \
         483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8)"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn scalar_mul_distributes_over_negation(k in any::<u64>()) {
        let k = Scalar::from(k);
        let kg = GENERATOR.scalar_mul(&k).unwrap();

        prop_assert!(kg.is_on_curve());
        prop_assert_eq!(GENERATOR.scalar_mul(&-k).unwrap(), -kg);
        prop_assert_eq!(kg.add(&-kg).unwrap(), Point::Infinity);
    }
}
