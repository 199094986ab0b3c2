//! # Error Types for binary values

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinaryError {
    #[error("Invalid bit string length: expected {expected} bits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("Invalid bit {digit:?} at offset {offset} (expected '0' or '1')")]
    InvalidDigit { digit: char, offset: usize },
}

pub type Result<T> = std::result::Result<T, BinaryError>;
