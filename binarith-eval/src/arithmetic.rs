//! Single binary operation on two decimal operands
//!
//! Backs the interactive arithmetic mode: both operands and the result are
//! kept so the caller can show all three bit patterns.

use binarith_core::FixedWidthBinary;
use tracing::debug;

use crate::error::{EvalError, Result};
use crate::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticReport<const WIDTH: usize> {
    pub lhs: FixedWidthBinary<WIDTH>,
    pub rhs: FixedWidthBinary<WIDTH>,
    pub operator: Operator,
    pub result: FixedWidthBinary<WIDTH>,
}

impl<const WIDTH: usize> ArithmeticReport<WIDTH> {
    pub fn lhs_bits(&self) -> String {
        self.lhs.to_bit_string()
    }

    pub fn rhs_bits(&self) -> String {
        self.rhs.to_bit_string()
    }

    pub fn result_bits(&self) -> String {
        self.result.to_bit_string()
    }

    pub fn result_decimal(&self) -> i64 {
        self.result.to_signed_decimal()
    }
}

/// Compute `lhs op rhs` at `WIDTH` bits.
///
/// The operator is checked before anything else. Operands outside the signed
/// range of `WIDTH` are rejected rather than wrapped.
pub fn compute<const WIDTH: usize>(lhs: i64, rhs: i64, op: &str) -> Result<ArithmeticReport<WIDTH>> {
    let operator: Operator = op.parse()?;
    let lhs = encode_operand::<WIDTH>(lhs, 1)?;
    let rhs = encode_operand::<WIDTH>(rhs, 2)?;

    let result = operator.apply(lhs, rhs);
    debug!(width = WIDTH, op = %operator, result = %result, "computed");

    Ok(ArithmeticReport {
        lhs,
        rhs,
        operator,
        result,
    })
}

fn encode_operand<const WIDTH: usize>(value: i64, position: usize) -> Result<FixedWidthBinary<WIDTH>> {
    if !FixedWidthBinary::<WIDTH>::in_signed_range(value) {
        return Err(EvalError::invalid_token(
            value.to_string(),
            position,
            format!("operand does not fit in {} bits", WIDTH),
        ));
    }
    Ok(FixedWidthBinary::from_decimal(value))
}
