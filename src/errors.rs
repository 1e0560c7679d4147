//! Error types shared by the compiler, the integration engine and the
//! input collaborators.
//!
//! Structural problems with the RPN text are [`CompileError`]s, rejected user
//! input is a [`ValidationError`]. Both are recoverable: they abort the current
//! integration attempt and are reported, the process keeps running.
//! Broken internal invariants (non-positive sampling step handed directly to the
//! extremum search, etc.) are panics, not errors.
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },
    #[error("stack underflow: '{token}' at position {position} has not enough operands")]
    StackUnderflow { token: String, position: usize },
    #[error("stack overflow: expression needs more than {capacity} pending operands")]
    StackOverflow { capacity: usize },
    #[error("{count} operands left on the stack, expected exactly one")]
    TrailingOperands { count: usize },
    #[error("empty expression")]
    EmptyExpression,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("the integrand is too long: {length} characters, at most {max} allowed")]
    IntegrandTooLong { length: usize, max: usize },
    #[error("the integrand is empty")]
    EmptyIntegrand,
    #[error("the interval is not defined")]
    UndefinedInterval,
    #[error("malformed interval '{0}', expected \"[start ; end]\"")]
    MalformedInterval(String),
    #[error("integrating in a [c ; c] interval is defined to be equal to 0 (c = {0})")]
    DegenerateInterval(f64),
    #[error("interval bounds must be finite, got [{start} ; {end}]")]
    NonFiniteBound { start: f64, end: f64 },
    #[error("interval [{start} ; {end}] is too wide to be sampled with step {step}")]
    IntervalTooWide { start: f64, end: f64, step: f64 },
    #[error("the scale of refinement must be between {min} and {max}, got {value}")]
    RefinementOutOfBounds { value: i64, min: u32, max: u32 },
    #[error("the extremum search step must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("invalid setting {key}: {message}")]
    InvalidSetting { key: String, message: String },
}

/// Everything that can abort one integration request end to end.
#[derive(Error, Debug)]
pub enum IntegralError {
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
