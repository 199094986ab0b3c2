//! # binarith evaluation
//!
//! Evaluate arithmetic over [`binarith_core::FixedWidthBinary`] values.
//!
//! - [`compute`] applies one operator to two decimal operands and keeps every
//!   intermediate bit pattern
//! - [`PostfixEvaluator`] reduces a whitespace-separated postfix expression on
//!   an operand [`Stack`]
//!
//! ## Example
//!
//! ```rust
//! use binarith_eval::{evaluate, ErrorKind};
//!
//! assert_eq!(evaluate("5 3 2 * +").unwrap(), 11);
//! assert_eq!(evaluate("5 +").unwrap_err().kind(), ErrorKind::MalformedExpression);
//! ```

pub mod arithmetic;
pub mod error;
pub mod evaluator;
pub mod operator;
pub mod stack;
pub mod token;

pub use arithmetic::{compute, ArithmeticReport};
pub use error::{ErrorKind, EvalError, Result};
pub use evaluator::{evaluate, Evaluator32, PostfixEvaluator};
pub use operator::{perform_operation, Operator};
pub use stack::Stack;
pub use token::{tokenize, Token};
