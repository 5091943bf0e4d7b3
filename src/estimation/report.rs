use crate::evaluation::ConvergenceCurve;

/// Outcome of a single estimation call.
#[derive(Debug, Clone)]
pub struct ConvergenceReport {
    pub iterations: u64,
    pub points: u64,
    pub inside: u64,
    pub outside: u64,
    pub result: f64,
    /// `false` only when a point cap stopped a deviation run early.
    pub converged: bool,
    pub curve: ConvergenceCurve,
}

impl ConvergenceReport {
    pub fn ratio(&self) -> f64 {
        if self.points > 0 {
            self.inside as f64 / self.points as f64
        } else {
            f64::NAN
        }
    }
}
