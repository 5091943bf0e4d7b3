use thiserror::Error;

/// Precondition violations raised by [`Estimator`](crate::estimation::Estimator).
///
/// These are programming errors on the caller's side; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimationError {
    #[error("invalid dimension count {0}: must be at least 1")]
    InvalidDimension(usize),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("division by zero: reference value must be non-zero")]
    DivisionByZero,
}
