use thiserror::Error;

use crate::estimation::EstimationError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Estimation(#[from] EstimationError),
}
