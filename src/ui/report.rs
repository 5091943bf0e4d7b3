use std::fmt::{Display, Formatter, Result};

use crate::estimation::{ConvergenceReport, Estimator};
use crate::utils::math::quadrant_volume;

/// Human-readable outcome of a run, printed by the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub dimensions: usize,
    pub result: f64,
    pub reference: f64,
    pub deviation: f64,
    pub points: u64,
    pub iterations: u64,
    pub ratio: f64,
    pub expected_ratio: f64,
    pub converged: bool,
}

impl Summary {
    pub fn new(estimator: &Estimator, report: &ConvergenceReport, reference: f64) -> Self {
        Self {
            dimensions: estimator.dimensions(),
            result: estimator.result(),
            reference,
            deviation: estimator.deviation(reference).unwrap_or(f64::NAN),
            points: report.points,
            iterations: report.iterations,
            ratio: report.ratio(),
            expected_ratio: quadrant_volume(estimator.dimensions()),
            converged: report.converged,
        }
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(
            f,
            "[ ] {} points in {} iteration(s), ratio {:.6} (exact quadrant volume {:.6})",
            self.points, self.iterations, self.ratio, self.expected_ratio
        )?;
        if !self.converged {
            writeln!(f, "[!] Stopped at the point cap before reaching the target deviation")?;
        }
        if !(2..=3).contains(&self.dimensions) {
            writeln!(
                f,
                "[!] The estimate is only valid in 2 or 3 dimensions (got {})",
                self.dimensions
            )?;
        }
        write!(
            f,
            "[*] Pi was estimated to {} ({}, ~{:.5}%)",
            self.result,
            self.reference,
            self.deviation * 100.0
        )
    }
}
