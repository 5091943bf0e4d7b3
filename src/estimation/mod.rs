mod error;
mod estimator;
mod point_log;
mod report;

pub use error::EstimationError;
pub use estimator::Estimator;
pub use point_log::{LogPolicy, PointLog};
pub use report::ConvergenceReport;
