//! # Fixed-Width Binary Numbers
//!
//! A [`FixedWidthBinary`] holds exactly `WIDTH` bits, least significant first,
//! and interprets them as a two's-complement signed integer. Every operation
//! works on the bits themselves rather than on a native integer:
//!
//! - `add` is a ripple-carry adder; the carry out of the sign bit is dropped
//! - `subtract` negates the right operand (invert, add one) and adds
//! - `multiply` sums left-shifted copies of `self` for each set bit of the
//!   multiplier
//!
//! All three wrap modulo 2^WIDTH.
//!
//! ```ignore
//! type Binary8 = FixedWidthBinary<8>;
//! type Binary32 = FixedWidthBinary<32>;
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Not, Sub};

use crate::error::{BinaryError, Result};
use crate::MAX_WIDTH;

/// Two's-complement integer stored as `WIDTH` explicit bits.
///
/// `bits[0]` is the least significant bit and `bits[WIDTH - 1]` is the sign bit.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedWidthBinary<const WIDTH: usize> {
    bits: [bool; WIDTH],
}

pub type Binary8 = FixedWidthBinary<8>;
pub type Binary16 = FixedWidthBinary<16>;
pub type Binary32 = FixedWidthBinary<32>;

impl<const WIDTH: usize> FixedWidthBinary<WIDTH> {
    const WIDTH_OK: () = assert!(
        WIDTH >= 1 && WIDTH <= MAX_WIDTH,
        "FixedWidthBinary width must be in 1..=64"
    );

    /// Smallest representable value, `-2^(WIDTH-1)`
    pub const MIN_SIGNED: i64 = if WIDTH >= 64 {
        i64::MIN
    } else {
        -(1i64 << (WIDTH - 1))
    };

    /// Largest representable value, `2^(WIDTH-1) - 1`
    pub const MAX_SIGNED: i64 = if WIDTH >= 64 {
        i64::MAX
    } else {
        (1i64 << (WIDTH - 1)) - 1
    };

    /// Wrap an already-encoded bit sequence (LSB first) without reinterpreting it.
    #[inline]
    pub fn from_bits(bits: [bool; WIDTH]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_OK;
        Self { bits }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_bits([false; WIDTH])
    }

    #[inline]
    pub fn one() -> Self {
        let mut bits = [false; WIDTH];
        bits[0] = true;
        Self::from_bits(bits)
    }

    /// Encode a decimal value.
    ///
    /// The magnitude is written out by repeated mod-2/div-2 until `WIDTH`
    /// digits exist, then negative values are inverted and incremented.
    /// Magnitude bits above `WIDTH` are lost, so a value outside
    /// [`Self::MIN_SIGNED`]`..=`[`Self::MAX_SIGNED`] comes back reduced
    /// modulo 2^WIDTH. Callers that care check [`Self::in_signed_range`] first.
    pub fn from_decimal(value: i64) -> Self {
        let mut magnitude = value.unsigned_abs();
        let mut bits = [false; WIDTH];
        for bit in bits.iter_mut() {
            *bit = magnitude % 2 == 1;
            magnitude /= 2;
        }

        let encoded = Self::from_bits(bits);
        if value < 0 {
            encoded.negate()
        } else {
            encoded
        }
    }

    /// Parse an MSB-first string of `'0'`/`'1'` characters, the inverse of
    /// [`Self::to_bit_string`].
    pub fn parse_bit_string(s: &str) -> Result<Self> {
        let found = s.chars().count();
        if found != WIDTH {
            return Err(BinaryError::InvalidLength {
                expected: WIDTH,
                found,
            });
        }

        let mut bits = [false; WIDTH];
        for (offset, digit) in s.chars().enumerate() {
            bits[WIDTH - 1 - offset] = match digit {
                '0' => false,
                '1' => true,
                _ => return Err(BinaryError::InvalidDigit { digit, offset }),
            };
        }
        Ok(Self::from_bits(bits))
    }

    #[inline]
    pub const fn width(&self) -> usize {
        WIDTH
    }

    /// Bits, least significant first
    #[inline]
    pub fn bits(&self) -> &[bool; WIDTH] {
        &self.bits
    }

    /// Bit `index` (0 = LSB), or `None` past the width
    #[inline]
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    #[inline]
    pub fn sign_bit(&self) -> bool {
        self.bits[WIDTH - 1]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| !b)
    }

    /// Whether `value` survives a round trip through [`Self::from_decimal`]
    #[inline]
    pub fn in_signed_range(value: i64) -> bool {
        (Self::MIN_SIGNED..=Self::MAX_SIGNED).contains(&value)
    }

    /// Weighted sum of all bits, the sign bit counted as `2^(WIDTH-1)`.
    pub fn to_unsigned_decimal(&self) -> u64 {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .fold(0u64, |acc, (i, _)| acc + (1u64 << i))
    }

    /// Two's-complement reading of the bits.
    pub fn to_signed_decimal(&self) -> i64 {
        if !self.sign_bit() {
            return self.to_unsigned_decimal() as i64;
        }

        // At WIDTH == 64 the magnitude of MIN is 2^63, which only fits by wrapping.
        let magnitude = self.negate().to_unsigned_decimal();
        0i64.wrapping_sub(magnitude as i64)
    }

    /// Bits rendered most significant first, exactly `WIDTH` characters.
    pub fn to_bit_string(&self) -> String {
        self.bits
            .iter()
            .rev()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect()
    }

    /// Bitwise NOT
    pub fn invert(self) -> Self {
        let mut bits = self.bits;
        for bit in bits.iter_mut() {
            *bit = !*bit;
        }
        Self::from_bits(bits)
    }

    /// Two's-complement negation: invert every bit, then add one.
    ///
    /// `MIN_SIGNED` negates to itself.
    pub fn negate(self) -> Self {
        self.invert().add(Self::one())
    }

    /// Logical left shift by `amount`, keeping the width.
    ///
    /// `amount` zero bits enter at the low end and the top `amount` bits fall
    /// off; shifting by `WIDTH` or more leaves zero.
    pub fn shift_left(self, amount: usize) -> Self {
        let mut shifted = [false; WIDTH];
        if amount < WIDTH {
            shifted[amount..].copy_from_slice(&self.bits[..WIDTH - amount]);
        }
        Self::from_bits(shifted)
    }

    /// Ripple-carry addition modulo 2^WIDTH.
    pub fn add(self, other: Self) -> Self {
        let mut sum = [false; WIDTH];
        let mut carry = false;
        for (i, out) in sum.iter_mut().enumerate() {
            let (a, b) = (self.bits[i], other.bits[i]);
            *out = a ^ b ^ carry;
            carry = (a && b) || (carry && (a ^ b));
        }
        // carry out of the sign bit is discarded
        Self::from_bits(sum)
    }

    /// `self + (-other)`, with `-other` formed by [`Self::negate`].
    pub fn subtract(self, other: Self) -> Self {
        self.add(other.negate())
    }

    /// Shift-and-add multiplication modulo 2^WIDTH.
    ///
    /// The multiplier's bits are read as unsigned weights; because the
    /// accumulator wraps at the same width, the low `WIDTH` bits are also the
    /// low bits of the signed product. There is no widening.
    pub fn multiply(self, other: Self) -> Self {
        other
            .bits
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .fold(Self::zero(), |acc, (i, _)| acc.add(self.shift_left(i)))
    }
}

impl<const WIDTH: usize> Default for FixedWidthBinary<WIDTH> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const WIDTH: usize> fmt::Debug for FixedWidthBinary<WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedWidthBinary<{}>(0b{})", WIDTH, self.to_bit_string())
    }
}

impl<const WIDTH: usize> fmt::Display for FixedWidthBinary<WIDTH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

impl<const WIDTH: usize> Add for FixedWidthBinary<WIDTH> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        FixedWidthBinary::add(self, rhs)
    }
}

impl<const WIDTH: usize> Sub for FixedWidthBinary<WIDTH> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl<const WIDTH: usize> Mul for FixedWidthBinary<WIDTH> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl<const WIDTH: usize> Neg for FixedWidthBinary<WIDTH> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<const WIDTH: usize> Not for FixedWidthBinary<WIDTH> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.invert()
    }
}
