//! Arithmetic operators shared by both evaluation modes

use std::fmt;
use std::str::FromStr;

use binarith_core::FixedWidthBinary;

use crate::error::{EvalError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];

    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            _ => None,
        }
    }

    /// `lhs op rhs`; `lhs` is the operand pushed first.
    pub fn apply<const WIDTH: usize>(
        self,
        lhs: FixedWidthBinary<WIDTH>,
        rhs: FixedWidthBinary<WIDTH>,
    ) -> FixedWidthBinary<WIDTH> {
        match self {
            Operator::Add => lhs.add(rhs),
            Operator::Sub => lhs.subtract(rhs),
            Operator::Mul => lhs.multiply(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(symbol: char) -> Result<Self> {
        Operator::from_symbol(symbol).ok_or_else(|| EvalError::InvalidOperation {
            op: symbol.to_string(),
        })
    }
}

/// Exactly one operator character, surrounding whitespace ignored.
impl FromStr for Operator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            _ => Err(EvalError::InvalidOperation {
                op: trimmed.to_string(),
            }),
        }
    }
}

/// Apply the operator named by `symbol`, rejecting anything but `+ - *`.
pub fn perform_operation<const WIDTH: usize>(
    symbol: char,
    lhs: FixedWidthBinary<WIDTH>,
    rhs: FixedWidthBinary<WIDTH>,
) -> Result<FixedWidthBinary<WIDTH>> {
    Ok(Operator::try_from(symbol)?.apply(lhs, rhs))
}
