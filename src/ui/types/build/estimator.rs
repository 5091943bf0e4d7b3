use crate::estimation::Estimator;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{EstimatorParams, RunChoice, RunConfig};

impl TryFrom<&EstimatorParams> for Estimator {
    type Error = BuildError;

    fn try_from(parameters: &EstimatorParams) -> Result<Self, Self::Error> {
        let estimator =
            Estimator::new(parameters.dimensions)?.with_log_policy(parameters.log_policy());
        Ok(match parameters.seed {
            Some(seed) => estimator.with_seed(seed),
            None => estimator,
        })
    }
}

/// Builds the estimator for a run, applying the point cap of deviation runs.
pub fn build_estimator(config: &RunConfig) -> Result<Estimator, BuildError> {
    let estimator = Estimator::try_from(&config.estimator)?;
    Ok(match &config.run {
        RunChoice::Deviation(p) => match p.max_points {
            Some(cap) => estimator.with_max_points(cap),
            None => estimator,
        },
        RunChoice::PointCount(_) => estimator,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::{EstimationError, LogPolicy};
    use crate::ui::types::choices::DeviationParameters;

    #[test]
    fn zero_dimensions_surface_as_estimation_error() {
        let params = EstimatorParams {
            dimensions: 0,
            ..EstimatorParams::default()
        };
        let err = Estimator::try_from(&params).err().unwrap();
        assert!(matches!(
            err,
            BuildError::Estimation(EstimationError::InvalidDimension(0))
        ));
    }

    #[test]
    fn params_shape_the_estimator() {
        let params = EstimatorParams {
            dimensions: 3,
            seed: Some(4),
            record_points: true,
            log_capacity: Some(8),
        };
        let est = Estimator::try_from(&params).unwrap();
        assert_eq!(est.dimensions(), 3);
        assert_eq!(est.points_visited().policy(), LogPolicy::Bounded(8));
        assert_eq!(est.max_points(), None);
    }

    #[test]
    fn oversized_log_capacity_builds_and_samples() {
        let params = EstimatorParams {
            log_capacity: Some(u64::MAX),
            seed: Some(2),
            ..EstimatorParams::default()
        };
        let mut est = Estimator::try_from(&params).unwrap();
        est.estimate_by_count(10).unwrap();
        assert_eq!(est.points_visited().len(), 10);
    }

    #[test]
    fn deviation_cap_is_applied() {
        let config = RunConfig {
            run: RunChoice::Deviation(DeviationParameters {
                max_points: Some(1234),
                ..DeviationParameters::default()
            }),
            ..RunConfig::default()
        };
        let est = build_estimator(&config).unwrap();
        assert_eq!(est.max_points(), Some(1234));
    }
}
