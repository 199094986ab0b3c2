//! Operand stack

use crate::error::{EvalError, Result};

/// Last-in-first-out stack owning its values.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove the top value; an empty stack is a malformed expression.
    pub fn pop(&mut self) -> Result<T> {
        self.items
            .pop()
            .ok_or_else(|| EvalError::malformed("stack is empty"))
    }

    pub fn peek(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or_else(|| EvalError::malformed("stack is empty"))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
