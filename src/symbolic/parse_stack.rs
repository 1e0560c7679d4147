//! Capacity-checked LIFO of subtrees used while an RPN expression is compiled.
//! It owns the pending nodes only during one compilation; `finish` hands the single
//! remaining tree over to the caller.
use crate::errors::CompileError;
use crate::symbolic::rpn_engine::Expr;

/// historical capacity of the compilation stack
pub const DEFAULT_STACK_CAPACITY: usize = 50;

#[derive(Debug)]
pub struct ParseStack {
    data: Vec<Expr>,
    capacity: usize,
}

impl ParseStack {
    pub fn new(capacity: usize) -> ParseStack {
        ParseStack {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, node: Expr) -> Result<(), CompileError> {
        if self.data.len() >= self.capacity {
            return Err(CompileError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.data.push(node);
        Ok(())
    }

    /// `token` and `position` describe the token that asked for the operand, they only
    /// go into the error.
    pub fn pop(&mut self, token: &str, position: usize) -> Result<Expr, CompileError> {
        self.data.pop().ok_or_else(|| CompileError::StackUnderflow {
            token: token.to_string(),
            position,
        })
    }

    /// Ends the compilation: exactly one tree must be left.
    pub fn finish(mut self) -> Result<Expr, CompileError> {
        match self.data.len() {
            0 => Err(CompileError::EmptyExpression),
            1 => Ok(self.data.remove(0)),
            count => Err(CompileError::TrailingOperands { count }),
        }
    }
}

impl Default for ParseStack {
    fn default() -> Self {
        ParseStack::new(DEFAULT_STACK_CAPACITY)
    }
}
