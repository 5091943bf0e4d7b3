use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::estimation::LogPolicy;

fn default_dimensions() -> usize {
    2
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimatorParams {
    #[serde(default = "default_dimensions")]
    #[schemars(
        title = "Dimensions",
        description = "Solve in how many dimensions (the estimate is exact only for 2 and 3)",
        range(min = 1),
        default = "default_dimensions"
    )]
    pub dimensions: usize,

    #[serde(default)]
    #[schemars(title = "Seed", description = "PRNG seed (None = OS entropy)")]
    pub seed: Option<u64>,

    #[serde(default = "default_true")]
    #[schemars(
        title = "Record points",
        description = "Keep sampled points for export and plotting?",
        default = "default_true"
    )]
    pub record_points: bool,

    #[serde(default)]
    #[schemars(
        title = "Point log capacity",
        description = "Keep at most this many recent points (None = unbounded)"
    )]
    pub log_capacity: Option<u64>,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            dimensions: default_dimensions(),
            seed: None,
            record_points: true,
            log_capacity: None,
        }
    }
}

impl EstimatorParams {
    pub fn log_policy(&self) -> LogPolicy {
        match (self.record_points, self.log_capacity) {
            (false, _) => LogPolicy::Disabled,
            (true, None) => LogPolicy::Unbounded,
            (true, Some(n)) => LogPolicy::Bounded(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }
}
