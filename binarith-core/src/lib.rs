//! # binarith core
//!
//! Fixed-width signed integers stored as explicit bit arrays.
//!
//! ## Key Features
//! - Width is a const generic (`1..=64` bits), so operands of different widths
//!   cannot be mixed
//! - Two's-complement encoding and decoding done bit by bit
//! - Ripple-carry addition, negate-then-add subtraction, shift-and-add multiplication
//! - Results wrap modulo 2^width; there is no overflow flag
//!
//! ```rust
//! use binarith_core::Binary32;
//!
//! let a = Binary32::from_decimal(5);
//! let b = Binary32::from_decimal(3);
//! assert_eq!(a.add(b).to_signed_decimal(), 8);
//! assert_eq!(a.subtract(b).to_bit_string(), "00000000000000000000000000000010");
//! ```

pub mod binary;
pub mod error;

pub use binary::{Binary16, Binary32, Binary8, FixedWidthBinary};
pub use error::{BinaryError, Result};

/// Widest supported value; decimals are carried in `i64`/`u64`
pub const MAX_WIDTH: usize = 64;
