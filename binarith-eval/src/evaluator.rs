//! Postfix (RPN) evaluator

use std::marker::PhantomData;

use binarith_core::FixedWidthBinary;
use tracing::{debug, trace};

use crate::error::{EvalError, Result};
use crate::stack::Stack;
use crate::token::{tokenize, Token};

/// Reduces postfix expressions over `WIDTH`-bit values.
///
/// Each call to [`PostfixEvaluator::evaluate`] works on a fresh stack, so one
/// evaluator can be reused, including after an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostfixEvaluator<const WIDTH: usize = 32> {
    _width: PhantomData<FixedWidthBinary<WIDTH>>,
}

/// Evaluator at the default 32-bit width
pub type Evaluator32 = PostfixEvaluator<32>;

impl<const WIDTH: usize> PostfixEvaluator<WIDTH> {
    pub fn new() -> Self {
        Self {
            _width: PhantomData,
        }
    }

    /// Signed decimal value of `expression`.
    pub fn evaluate(&self, expression: &str) -> Result<i64> {
        self.reduce(expression).map(|value| value.to_signed_decimal())
    }

    /// Reduce `expression` to its single binary value.
    ///
    /// Literals must lie in the signed range of `WIDTH`; arithmetic on them
    /// wraps modulo 2^WIDTH.
    pub fn reduce(&self, expression: &str) -> Result<FixedWidthBinary<WIDTH>> {
        let mut stack = Stack::new();

        for (index, token) in tokenize(expression).enumerate() {
            let position = index + 1;
            match token? {
                Token::Literal(value) => {
                    if !FixedWidthBinary::<WIDTH>::in_signed_range(value) {
                        return Err(EvalError::invalid_token(
                            value.to_string(),
                            position,
                            format!("literal does not fit in {} bits", WIDTH),
                        ));
                    }
                    trace!(position, value, "push literal");
                    stack.push(FixedWidthBinary::<WIDTH>::from_decimal(value));
                }
                Token::Operator(op) => {
                    if stack.len() < 2 {
                        return Err(EvalError::malformed(format!(
                            "operator '{}' at position {} needs two operands, found {}",
                            op,
                            position,
                            stack.len()
                        )));
                    }
                    let rhs = stack.pop()?;
                    let lhs = stack.pop()?;
                    let result = op.apply(lhs, rhs);
                    debug!(
                        position,
                        lhs = lhs.to_signed_decimal(),
                        rhs = rhs.to_signed_decimal(),
                        op = %op,
                        result = result.to_signed_decimal(),
                        "reduce"
                    );
                    stack.push(result);
                }
            }
        }

        let result = stack
            .pop()
            .map_err(|_| EvalError::malformed("expression produced no value"))?;
        if !stack.is_empty() {
            return Err(EvalError::malformed(format!(
                "{} values left on the stack, expected 1",
                stack.len() + 1
            )));
        }
        Ok(result)
    }
}

/// Evaluate `expression` with 32-bit values.
pub fn evaluate(expression: &str) -> Result<i64> {
    Evaluator32::new().evaluate(expression)
}
