//! Errors raised by vector and scalar helpers.

use thiserror::Error;

/// Invalid-argument failures from the math layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("can't divide vector by 0")]
    DivisionByZero,

    #[error("invalid vector index access, 3 dimensions available, caller asked for {index}-th")]
    IndexOutOfRange { index: usize },

    #[error("cannot lerp {t} in [{start}, {end}]")]
    LerpOutOfRange { t: f64, start: f64, end: f64 },
}

/// Result type for math operations.
pub type MathResult<T> = Result<T, MathError>;
