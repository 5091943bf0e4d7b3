mod error;
mod estimator;
mod run;

pub use error::BuildError;

pub use estimator::build_estimator;
pub use run::{reference_for, run_estimation};
