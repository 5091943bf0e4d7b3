use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// State of an estimation after one sampling iteration.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub iteration: u64,
    pub points_seen: u64,
    pub inside: u64,
    pub estimate: f64,
    /// Relative deviation from the reference, NaN when no reference was given.
    pub deviation: f64,
    pub seconds: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "iter={}, seen={}, inside={}, pi~{:.6}, dev={:.6}, t={:.3}s",
            self.iteration,
            self.points_seen,
            self.inside,
            self.estimate,
            self.deviation,
            self.seconds
        )
    }
}
