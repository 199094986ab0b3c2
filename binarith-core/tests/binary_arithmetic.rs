//! Integration tests for fixed-width binary arithmetic
//!
//! Checks the bit-level operations against native wrapping arithmetic at
//! several widths.

use binarith_core::{Binary16, Binary32, Binary8, FixedWidthBinary};
use proptest::prelude::*;

fn arb_i8_pair() -> impl Strategy<Value = (i8, i8)> {
    (any::<i8>(), any::<i8>())
}

fn arb_small_product_pair() -> impl Strategy<Value = (i32, i32)> {
    (-46_340i32..=46_340, -46_340i32..=46_340)
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_width_is_part_of_the_type() {
    assert_eq!(Binary8::zero().width(), 8);
    assert_eq!(Binary16::zero().width(), 16);
    assert_eq!(Binary32::zero().width(), 32);
    assert_eq!(FixedWidthBinary::<5>::zero().to_bit_string(), "00000");
}

#[test]
fn test_every_i8_roundtrips() {
    for v in i8::MIN..=i8::MAX {
        let b = Binary8::from_decimal(v as i64);
        assert_eq!(b.to_signed_decimal(), v as i64, "value {}", v);
        assert_eq!(b.to_unsigned_decimal(), v as u8 as u64, "value {}", v);
        assert_eq!(b.to_bit_string(), format!("{:08b}", v as u8));
    }
}

#[test]
fn test_known_bit_patterns() {
    assert_eq!(
        Binary32::from_decimal(3).to_bit_string(),
        "00000000000000000000000000000011"
    );
    assert_eq!(
        Binary32::from_decimal(-2).to_bit_string(),
        "11111111111111111111111111111110"
    );
    assert_eq!(
        Binary32::from_decimal(i32::MAX as i64).to_bit_string(),
        "01111111111111111111111111111111"
    );
}

#[test]
fn test_sign_bit_boundaries() {
    assert!(!Binary16::from_decimal(Binary16::MAX_SIGNED).sign_bit());
    assert!(Binary16::from_decimal(Binary16::MIN_SIGNED).sign_bit());
    assert!(Binary16::from_decimal(-1).sign_bit());
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_exhaustive_i8_add_and_subtract() {
    for a in i8::MIN..=i8::MAX {
        for b in [i8::MIN, -77, -1, 0, 1, 5, 100, i8::MAX] {
            let (x, y) = (Binary8::from_decimal(a as i64), Binary8::from_decimal(b as i64));
            assert_eq!(x.add(y).to_signed_decimal(), a.wrapping_add(b) as i64);
            assert_eq!(x.subtract(y).to_signed_decimal(), a.wrapping_sub(b) as i64);
        }
    }
}

#[test]
fn test_multiply_by_powers_of_two_is_shift() {
    let v = Binary32::from_decimal(-13);
    for i in 0..32 {
        let power = Binary32::zero().add(Binary32::one()).shift_left(i);
        assert_eq!(v.multiply(power), v.shift_left(i), "shift {}", i);
    }
}

#[test]
fn test_multiply_min_by_minus_one_wraps() {
    let min = Binary32::from_decimal(i32::MIN as i64);
    let minus_one = Binary32::from_decimal(-1);
    assert_eq!(min.multiply(minus_one), min);
}

proptest! {
    #[test]
    fn test_roundtrip_32(v in any::<i32>()) {
        prop_assert_eq!(Binary32::from_decimal(v as i64).to_signed_decimal(), v as i64);
    }

    #[test]
    fn test_roundtrip_64(v in any::<i64>()) {
        prop_assert_eq!(FixedWidthBinary::<64>::from_decimal(v).to_signed_decimal(), v);
    }

    #[test]
    fn test_bit_string_shape(v in any::<i32>()) {
        let s = Binary32::from_decimal(v as i64).to_bit_string();
        prop_assert_eq!(s.len(), 32);
        prop_assert!(s.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_add_wraparound_law(a in any::<i32>(), b in any::<i32>()) {
        let sum = Binary32::from_decimal(a as i64).add(Binary32::from_decimal(b as i64));
        prop_assert_eq!(sum.to_signed_decimal(), a.wrapping_add(b) as i64);
    }

    #[test]
    fn test_add_in_range_is_exact(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let sum = Binary32::from_decimal(a).add(Binary32::from_decimal(b));
        prop_assert_eq!(sum.to_signed_decimal(), a + b);
    }

    #[test]
    fn test_subtract_undoes_add(a in any::<i32>(), b in any::<i32>()) {
        let x = Binary32::from_decimal(a as i64);
        let y = Binary32::from_decimal(b as i64);
        prop_assert_eq!(x.add(y).subtract(y).to_signed_decimal(), x.to_signed_decimal());
    }

    #[test]
    fn test_multiply_matches_native((a, b) in arb_small_product_pair()) {
        let product = Binary32::from_decimal(a as i64).multiply(Binary32::from_decimal(b as i64));
        prop_assert_eq!(product.to_signed_decimal(), (a as i64) * (b as i64));
    }

    #[test]
    fn test_multiply_wraps_like_native((a, b) in arb_i8_pair()) {
        let product = Binary8::from_decimal(a as i64).multiply(Binary8::from_decimal(b as i64));
        prop_assert_eq!(product.to_signed_decimal(), a.wrapping_mul(b) as i64);
    }

    #[test]
    fn test_out_of_range_reduces_modulo_width(v in any::<i64>()) {
        prop_assert_eq!(Binary16::from_decimal(v).to_signed_decimal(), v as i16 as i64);
    }
}
