mod convergence_curve;
mod snapshot;

pub use convergence_curve::ConvergenceCurve;
pub use snapshot::Snapshot;
