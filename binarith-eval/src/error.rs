//! Evaluation error types

use thiserror::Error;

/// Category of an [`EvalError`], for callers that branch on the kind only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOperation,
    MalformedExpression,
    InvalidToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Invalid operation: {op:?} (expected one of + - *)")]
    InvalidOperation { op: String },

    #[error("Malformed expression: {reason}")]
    MalformedExpression { reason: String },

    #[error("Invalid token {token:?} at position {position}: {reason}")]
    InvalidToken {
        token: String,
        position: usize,
        reason: String,
    },
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            EvalError::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            EvalError::InvalidToken { .. } => ErrorKind::InvalidToken,
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        EvalError::MalformedExpression {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_token(
        token: impl Into<String>,
        position: usize,
        reason: impl Into<String>,
    ) -> Self {
        EvalError::InvalidToken {
            token: token.into(),
            position,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
