use std::io::Error;
use std::path::Path;
use std::sync::mpsc::Sender;
use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::estimation::{ConvergenceReport, EstimationError, LogPolicy, PointLog};
use crate::evaluation::{ConvergenceCurve, Snapshot};
use crate::sampling::{Point, PointSource, UniformSource};
use crate::utils::ExportFormat;
use crate::utils::math::solve_for_pi;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    inside: u64,
    outside: u64,
}

impl Tally {
    #[inline]
    fn total(&self) -> u64 {
        self.inside + self.outside
    }

    #[inline]
    fn ratio(&self) -> f64 {
        self.inside as f64 / self.total() as f64
    }
}

/// Monte Carlo Pi estimator over the unit hypercube `[0, 1)^d`.
///
/// Points are drawn uniformly and counted as *inside* when they fall in the
/// positive quadrant of the unit n-ball. The inside ratio is turned into an
/// estimate with `ratio * 2 * dimensions`, which is only a valid Pi estimate
/// for `d = 2` and `d = 3`.
///
/// Every sampled point is appended to [`points_visited`](Self::points_visited)
/// according to the configured [`LogPolicy`]; by default the log is never
/// cleared and grows across calls.
///
/// Estimation calls take `&mut self`: one instance serves one caller at a time.
pub struct Estimator {
    dimensions: usize,
    result: f64,
    points_visited: PointLog,
    source: Box<dyn PointSource>,
    max_points: Option<u64>,
    estimates: u64,
    progress_tx: Option<Sender<Snapshot>>,
}

impl Estimator {
    pub fn new(dimensions: usize) -> Result<Self, EstimationError> {
        if dimensions < 1 {
            return Err(EstimationError::InvalidDimension(dimensions));
        }

        Ok(Self {
            dimensions,
            result: 0.0,
            points_visited: PointLog::default(),
            source: Box::new(UniformSource::from_entropy()),
            max_points: None,
            estimates: 0,
            progress_tx: None,
        })
    }
}

impl Estimator {
    pub fn with_source<S: PointSource + 'static>(mut self, source: S) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_source(UniformSource::seeded(seed))
    }

    /// Replaces the point log. Points recorded so far are discarded.
    pub fn with_log_policy(mut self, policy: LogPolicy) -> Self {
        self.points_visited = PointLog::new(policy);
        self
    }

    /// Caps the number of points a deviation run may draw.
    pub fn with_max_points(mut self, max_points: u64) -> Self {
        self.max_points = Some(max_points);
        self
    }

    pub fn with_progress(mut self, tx: Sender<Snapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Last computed estimate; `0.0` until the first estimation call.
    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn has_estimate(&self) -> bool {
        self.estimates > 0
    }

    pub fn points_visited(&self) -> &PointLog {
        &self.points_visited
    }

    pub fn max_points(&self) -> Option<u64> {
        self.max_points
    }

    /// `true` iff `point` lies within the unit n-ball.
    #[inline]
    pub fn classify(point: &Point) -> bool {
        point.norm() <= 1.0
    }

    /// Draws `count` fresh points without recording them.
    pub fn sample(&mut self, count: usize) -> impl Iterator<Item = Point> + '_ {
        self.source.sample(self.dimensions, count)
    }

    /// Relative deviation `|reference - result| / reference`.
    pub fn deviation(&self, reference: f64) -> Result<f64, EstimationError> {
        if reference == 0.0 {
            return Err(EstimationError::DivisionByZero);
        }
        Ok((reference - self.result).abs() / reference)
    }

    pub fn estimate_by_count(
        &mut self,
        count: usize,
    ) -> Result<ConvergenceReport, EstimationError> {
        if count == 0 {
            return Err(EstimationError::InvalidArgument(
                "point count must be > 0".into(),
            ));
        }

        let start = Instant::now();
        let mut tally = Tally::default();
        self.draw(count, &mut tally);
        self.result = solve_for_pi(tally.ratio(), self.dimensions);
        self.estimates += 1;

        let mut curve = ConvergenceCurve::default();
        self.push_snapshot(&mut curve, 1, &tally, f64::NAN, start);

        debug!(
            dimensions = self.dimensions,
            points = tally.total(),
            inside = tally.inside,
            outside = tally.outside,
            result = self.result,
            "estimated from point count"
        );

        Ok(self.report(1, tally, true, curve))
    }

    /// Samples `step` points per iteration until the running estimate is
    /// within `target_deviation` of `reference`.
    ///
    /// The deviation is checked before each iteration, so a current result
    /// already within the target draws nothing and is left untouched. Counts
    /// accumulate over every iteration of the call. Without [`with_max_points`](Self::with_max_points)
    /// there is no upper bound: an unreachable target (e.g. `0.0`, or one
    /// tighter than the formula's bias outside 2 and 3 dimensions) never
    /// returns.
    pub fn estimate_by_deviation(
        &mut self,
        target_deviation: f64,
        step: usize,
        reference: f64,
    ) -> Result<ConvergenceReport, EstimationError> {
        if step == 0 {
            return Err(EstimationError::InvalidArgument("step must be > 0".into()));
        }
        if target_deviation.is_nan() || target_deviation < 0.0 {
            return Err(EstimationError::InvalidArgument(format!(
                "target deviation must be >= 0, got {target_deviation}"
            )));
        }
        if reference == 0.0 {
            return Err(EstimationError::DivisionByZero);
        }
        let exact_dimension = (2..=3).contains(&self.dimensions);
        if self.max_points.is_none() && (target_deviation == 0.0 || !exact_dimension) {
            warn!(
                dimensions = self.dimensions,
                target_deviation, "deviation target may be unreachable and no point cap is set"
            );
        }

        let start = Instant::now();
        let mut tally = Tally::default();
        let mut curve = ConvergenceCurve::default();
        let mut iterations = 0u64;

        let mut converged = true;
        while self.deviation(reference)? > target_deviation {
            if let Some(cap) = self.max_points {
                if tally.total() >= cap {
                    converged = false;
                    break;
                }
            }

            self.draw(step, &mut tally);
            iterations += 1;
            self.result = solve_for_pi(tally.ratio(), self.dimensions);
            self.estimates += 1;

            let deviation = self.deviation(reference)?;
            self.push_snapshot(&mut curve, iterations, &tally, deviation, start);
            trace!(iterations, points = tally.total(), result = self.result, deviation);
        }

        if converged {
            info!("Reached desired deviation after {} points", tally.total());
        } else {
            warn!(
                points = tally.total(),
                result = self.result,
                "point cap reached before the target deviation"
            );
        }

        Ok(self.report(iterations, tally, converged, curve))
    }

    /// Writes the retained points with their inside/outside classification.
    pub fn export_points<P: AsRef<Path>>(&self, path: P, fmt: ExportFormat) -> Result<(), Error> {
        self.points_visited.export(path, fmt, Self::classify)
    }

    fn draw(&mut self, count: usize, tally: &mut Tally) {
        for point in self.source.sample(self.dimensions, count) {
            if Self::classify(&point) {
                tally.inside += 1;
            } else {
                tally.outside += 1;
            }
            self.points_visited.record(point);
        }
    }

    fn push_snapshot(
        &self,
        curve: &mut ConvergenceCurve,
        iteration: u64,
        tally: &Tally,
        deviation: f64,
        start: Instant,
    ) {
        let snapshot = Snapshot {
            iteration,
            points_seen: tally.total(),
            inside: tally.inside,
            estimate: self.result,
            deviation,
            seconds: start.elapsed().as_secs_f64(),
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }
        curve.push(snapshot);
    }

    fn report(
        &self,
        iterations: u64,
        tally: Tally,
        converged: bool,
        curve: ConvergenceCurve,
    ) -> ConvergenceReport {
        ConvergenceReport {
            iterations,
            points: tally.total(),
            inside: tally.inside,
            outside: tally.outside,
            result: self.result,
            converged,
            curve,
        }
    }
}
