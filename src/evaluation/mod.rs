mod preview;

pub use preview::{ConvergenceCurve, Snapshot};
