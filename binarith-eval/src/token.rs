//! Postfix tokens
//!
//! Tokens are whitespace-separated words. Classification looks at the first
//! character only (and the second after a leading `-`); the parse that follows
//! must then consume the whole word.

use crate::error::{EvalError, Result};
use crate::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Decimal integer literal
    Literal(i64),
    /// One of `+ - *`
    Operator(Operator),
}

impl Token {
    /// Classify one word; `position` is the 1-based token index used in errors.
    pub fn classify(word: &str, position: usize) -> Result<Self> {
        let mut chars = word.chars();
        let first = chars.next();
        let second = chars.next();

        let looks_numeric = match (first, second) {
            (Some(c), _) if c.is_ascii_digit() => true,
            (Some('-'), Some(c)) if c.is_ascii_digit() => true,
            _ => false,
        };

        if looks_numeric {
            return word
                .parse::<i64>()
                .map(Token::Literal)
                .map_err(|_| EvalError::invalid_token(word, position, "not a decimal integer"));
        }

        match (first, second) {
            (Some(symbol), None) => Operator::from_symbol(symbol)
                .map(Token::Operator)
                .ok_or_else(|| EvalError::invalid_token(word, position, "unknown operator")),
            _ => Err(EvalError::invalid_token(
                word,
                position,
                "expected an integer or one of + - *",
            )),
        }
    }
}

/// Split an expression on whitespace and classify each word in order.
pub fn tokenize(expression: &str) -> impl Iterator<Item = Result<Token>> + '_ {
    expression
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| Token::classify(word, index + 1))
}
