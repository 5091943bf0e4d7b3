use crate::estimation::{ConvergenceReport, Estimator};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::RunChoice;
use tracing::info;

fn to_usize(value: u64, name: &str) -> Result<usize, BuildError> {
    usize::try_from(value)
        .map_err(|_| BuildError::InvalidParameter(format!("{name} too large for usize")))
}

/// Runs the estimation mode selected by `choice` on `estimator`.
pub fn run_estimation(
    estimator: &mut Estimator,
    choice: &RunChoice,
) -> Result<ConvergenceReport, BuildError> {
    match choice {
        RunChoice::PointCount(p) => {
            let count = to_usize(p.points, "points")?;
            info!(
                dimensions = estimator.dimensions(),
                points = count,
                "estimating from point count"
            );
            Ok(estimator.estimate_by_count(count)?)
        }
        RunChoice::Deviation(p) => {
            let step = to_usize(p.step, "step")?;
            info!(
                dimensions = estimator.dimensions(),
                deviation = p.deviation,
                step,
                reference = p.reference,
                "estimating until deviation is reached"
            );
            Ok(estimator.estimate_by_deviation(p.deviation, step, p.reference)?)
        }
    }
}

/// Reference value a run is judged against.
pub fn reference_for(choice: &RunChoice) -> f64 {
    match choice {
        RunChoice::Deviation(p) => p.reference,
        RunChoice::PointCount(_) => std::f64::consts::PI,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::EstimationError;
    use crate::ui::report::Summary;
    use crate::ui::types::build::build_estimator;
    use crate::ui::types::choices::{DeviationParameters, PointCountParameters, RunConfig};
    use crate::utils::ExportFormat;
    use std::f64::consts::PI;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn point_count_run_records_points() {
        let mut est = Estimator::new(2).unwrap().with_seed(10);
        let report =
            run_estimation(&mut est, &RunChoice::PointCount(PointCountParameters { points: 500 }))
                .unwrap();
        assert_eq!(report.points, 500);
        assert_eq!(est.points_visited().len(), 500);
    }

    #[test]
    fn zero_points_is_rejected_by_the_estimator() {
        let mut est = Estimator::new(2).unwrap();
        let choice = RunChoice::PointCount(PointCountParameters { points: 0 });
        let err = run_estimation(&mut est, &choice).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Estimation(EstimationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn deviation_run_reaches_target() {
        let mut est = Estimator::new(2).unwrap().with_seed(21).with_max_points(5_000_000);
        let choice = RunChoice::Deviation(DeviationParameters {
            deviation: 0.02,
            step: 200,
            ..DeviationParameters::default()
        });
        let report = run_estimation(&mut est, &choice).unwrap();
        assert!(report.converged);
        assert!(est.deviation(reference_for(&choice)).unwrap() <= 0.02);
    }

    #[test]
    fn reference_defaults_to_pi() {
        assert_eq!(reference_for(&RunChoice::default()), PI);
        let choice = RunChoice::Deviation(DeviationParameters {
            reference: 3.0,
            ..DeviationParameters::default()
        });
        assert_eq!(reference_for(&choice), 3.0);
    }

    #[test]
    fn json_config_runs_end_to_end_and_exports() {
        let config = RunConfig::from_json_str(
            r#"{
                "estimator": {"dimensions": 2, "seed": 31},
                "run": {"type": "deviation", "params": {"deviation": 0.05, "step": 100, "max_points": 1000000}}
            }"#,
        )
        .unwrap();

        let mut estimator = build_estimator(&config).unwrap();
        let report = run_estimation(&mut estimator, &config.run).unwrap();
        assert!(report.converged);
        assert_eq!(report.curve.len() as u64, report.iterations);

        let dir = tempdir().unwrap();
        let points = dir.path().join("points.csv");
        let curve = dir.path().join("curve.json");
        estimator.export_points(&points, ExportFormat::Csv).unwrap();
        report.curve.export(&curve, ExportFormat::Json).unwrap();

        let csv = fs::read_to_string(&points).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("x0,x1,inside"));
        assert_eq!(lines.count() as u64, report.points);

        let text = fs::read_to_string(&curve).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json.as_array().unwrap().len() as u64, report.iterations);

        let summary = Summary::new(&estimator, &report, reference_for(&config.run));
        assert!(summary.deviation <= 0.05);
    }
}
