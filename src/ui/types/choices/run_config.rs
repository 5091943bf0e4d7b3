use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::ui::types::choices::{EstimatorParams, RunChoice};

/// Everything needed for one estimation: how to build the estimator and
/// which estimation mode to run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RunConfig {
    #[serde(default)]
    pub estimator: EstimatorParams,
    #[serde(default)]
    pub run: RunChoice,
}

impl RunConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid run configuration")
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{DeviationParameters, PointCountParameters};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_document_is_the_default_run() {
        let cfg = RunConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, RunConfig::default());
        assert_eq!(cfg.run, RunChoice::PointCount(PointCountParameters { points: 30_000 }));
    }

    #[test]
    fn reads_a_deviation_run_from_file() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(
            tf,
            r#"{{
                "estimator": {{"dimensions": 3, "seed": 9}},
                "run": {{"type": "deviation", "params": {{"deviation": 0.01, "step": 500, "max_points": 100000}}}}
            }}"#
        )
        .unwrap();

        let cfg = RunConfig::from_json_file(tf.path()).unwrap();
        assert_eq!(cfg.estimator.dimensions, 3);
        assert_eq!(cfg.estimator.seed, Some(9));
        assert_eq!(
            cfg.run,
            RunChoice::Deviation(DeviationParameters {
                deviation: 0.01,
                step: 500,
                reference: std::f64::consts::PI,
                max_points: Some(100_000),
            })
        );
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = RunConfig::from_json_str(r#"{"run": {"type": "magic", "params": {}}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid run configuration"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = RunConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
