//! End-to-end scenarios spanning all three number kinds through the
//! top-level `exactnum` facade, exercising the crate the way a downstream
//! user would: via `use exactnum::*` rather than reaching into the
//! individual `exactnum-*` crates directly.

use exactnum::base::RoundingMode;
use exactnum::{parse_as_integer, parse_as_rational, BigDecimal, BigInteger, BigRational, Number};

#[test]
fn decimal_literal_as_rational_reduces() {
    assert_eq!(parse_as_rational("1.125").unwrap().to_string(), "9/8");
}

#[test]
fn one_third_at_scale_30() {
    let one: BigDecimal = "1".parse().unwrap();
    let three: BigDecimal = "3".parse().unwrap();

    let half_up = one.divided_by(&three, 30, RoundingMode::HalfUp).unwrap();
    assert_eq!(half_up.to_string(), "0.333333333333333333333333333333");

    let up = one.divided_by(&three, 30, RoundingMode::Up).unwrap();
    assert_eq!(up.to_string(), "0.333333333333333333333333333334");

    assert!(one.divided_by(&three, 30, RoundingMode::Unnecessary).is_err());
}

#[test]
fn integer_sqrt_of_ten() {
    let ten = BigInteger::from(10u32);
    assert!(ten.sqrt(RoundingMode::Unnecessary).is_err());
    assert_eq!(ten.sqrt(RoundingMode::Down).unwrap(), BigInteger::from(3u32));
    assert_eq!(ten.sqrt(RoundingMode::Up).unwrap(), BigInteger::from(4u32));
    // 2*1 < 2*3+1, so the discarded remainder is less than half: truncate.
    assert_eq!(ten.sqrt(RoundingMode::HalfUp).unwrap(), BigInteger::from(3u32));
}

#[test]
fn repeating_decimal_strings() {
    let twenty_two_sevenths: BigRational = "22/7".parse().unwrap();
    assert_eq!(twenty_two_sevenths.to_repeating_decimal_string(), "3.(142857)");

    let seven_sixths: BigRational = "7/6".parse().unwrap();
    assert_eq!(seven_sixths.to_repeating_decimal_string(), "1.1(6)");
}

#[test]
fn negative_rational_splits_into_integral_and_fractional() {
    let r: BigRational = "-7/3".parse().unwrap();
    let integral = r.get_integral_part();
    let fractional = r.get_fractional_part();
    assert_eq!(integral, BigInteger::from(-2i32));
    assert_eq!(fractional.to_string(), "-1/3");
    assert_eq!(&BigRational::from_integer(integral) + &fractional, r);
}

#[test]
fn signed_byte_round_trip() {
    // `0xFF 0x80` is a non-minimal two's-complement encoding of -128 (the
    // leading 0xFF is a redundant sign-extension byte): it still decodes to
    // -128, but the minimal encoding this library produces is the single
    // byte 0x80, which already carries the sign bit on its own.
    let n = BigInteger::from_signed_bytes_be(&[0xFF, 0x80]).unwrap();
    assert_eq!(n, BigInteger::from(-128i32));
    assert_eq!(n.to_signed_bytes_be(), vec![0x80u8]);

    // A magnitude whose top bit is set needs the extra sign byte to stay
    // positive.
    let p = BigInteger::from(128i32);
    assert_eq!(p.to_signed_bytes_be(), vec![0x00u8, 0x80]);
    assert_eq!(BigInteger::from_signed_bytes_be(&[0x00, 0x80]).unwrap(), p);
}

#[test]
fn sum_widens_to_broadest_kind_present() {
    let values = vec![
        Number::from(BigInteger::from(1u32)),
        Number::from("0.5".parse::<BigDecimal>().unwrap()),
        Number::from("1/4".parse::<BigRational>().unwrap()),
    ];
    let total = Number::sum(values);
    assert!(total.is_rational());
    assert_eq!(total.to_string(), "7/4");
}

#[test]
fn divided_by_matches_divided_by_exact_when_expressible() {
    let one: BigDecimal = "1".parse().unwrap();
    let eight: BigDecimal = "8".parse().unwrap();
    let via_exact = one.divided_by_exact(&eight).unwrap();
    let scale = via_exact.scale();
    let via_rounded = one.divided_by(&eight, scale, RoundingMode::Unnecessary).unwrap();
    assert_eq!(via_exact, via_rounded);
}

#[test]
fn cross_kind_of_can_fail_with_rounding_necessary() {
    assert!(parse_as_integer("1/2").is_err());
    assert!(parse_as_integer("4/2").is_ok());
}

#[test]
fn big_integer_divmod_invariant_holds_across_signs() {
    let cases: &[(i64, i64)] = &[(7, 2), (-7, 2), (7, -2), (-7, -2), (10, 3), (-10, 3)];
    for &(a, b) in cases {
        let a = BigInteger::from(a);
        let b = BigInteger::from(b);
        let (q, r) = a.quotient_and_remainder(&b);
        assert_eq!(&(&q * &b) + &r, a);
        assert!(r.abs() < b.abs());
        assert!(r.is_zero() || r.signum() == a.signum());
    }
}

#[test]
fn big_decimal_scale_rules_hold() {
    let x: BigDecimal = "1.25".parse().unwrap();
    let y: BigDecimal = "2.5".parse().unwrap();
    assert_eq!((&x + &y).scale(), x.scale().max(y.scale()));
    assert_eq!((&x * &y).scale(), x.scale() + y.scale());
}

#[test]
fn big_integer_base_round_trip_for_every_supported_base() {
    let n = BigInteger::from(123456789u64);
    for base in 2..=36u32 {
        let rendered = n.to_radix_string(base).unwrap();
        let parsed = BigInteger::parse_radix(&rendered, base).unwrap();
        assert_eq!(parsed, n);
    }
}
