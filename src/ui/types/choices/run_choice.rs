use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_points() -> u64 {
    30_000
}

fn default_deviation() -> f64 {
    0.001
}

fn default_step() -> u64 {
    1_000
}

fn default_reference() -> f64 {
    std::f64::consts::PI
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PointCountParameters {
    #[serde(default = "default_points")]
    #[schemars(
        title = "Points",
        description = "How many points to use",
        range(min = 1),
        default = "default_points"
    )]
    pub points: u64,
}

impl Default for PointCountParameters {
    fn default() -> Self {
        Self {
            points: default_points(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DeviationParameters {
    #[serde(default = "default_deviation")]
    #[schemars(
        title = "Deviation",
        description = "Desired relative deviation from the reference (0.001 = 0.1%)",
        range(min = 0.0),
        default = "default_deviation"
    )]
    pub deviation: f64,

    #[serde(default = "default_step")]
    #[schemars(
        title = "Step",
        description = "Points drawn in each iteration",
        range(min = 1),
        default = "default_step"
    )]
    pub step: u64,

    #[serde(default = "default_reference")]
    #[schemars(
        title = "Reference",
        description = "Known value the estimate is compared against",
        default = "default_reference"
    )]
    pub reference: f64,

    #[serde(default)]
    #[schemars(
        title = "Max Points",
        description = "Give up after this many points (None = no limit, may never finish)"
    )]
    pub max_points: Option<u64>,
}

impl Default for DeviationParameters {
    fn default() -> Self {
        Self {
            deviation: default_deviation(),
            step: default_step(),
            reference: default_reference(),
            max_points: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(RunKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum RunChoice {
    #[strum_discriminants(strum(
        message = "Point count",
        detailed_message = "Estimate once from a fixed number of points."
    ))]
    PointCount(PointCountParameters),
    #[strum_discriminants(strum(
        message = "Deviation",
        detailed_message = "Sample in steps until the estimate is within a deviation of the reference."
    ))]
    Deviation(DeviationParameters),
}

impl Default for RunChoice {
    fn default() -> Self {
        RunChoice::PointCount(PointCountParameters::default())
    }
}

impl UIChoice for RunChoice {
    type Kind = RunKind;

    fn schema() -> Schema {
        schema_for!(RunChoice)
    }

    fn prompt_label() -> &'static str {
        "Estimate Pi from:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        let params = match kind {
            RunKind::PointCount => serde_json::to_value(PointCountParameters::default()),
            RunKind::Deviation => serde_json::to_value(DeviationParameters::default()),
        };
        params.unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{FieldKind, specs_for_kind};
    use serde_json::json;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn tagged_enum_serialization() {
        let v = serde_json::to_value(RunChoice::default()).unwrap();
        assert_eq!(v, json!({"type": "point-count", "params": {"points": 30000}}));

        let d = RunChoice::Deviation(DeviationParameters::default());
        let v = serde_json::to_value(d).unwrap();
        assert_eq!(v["type"], "deviation");
        assert_eq!(v["params"]["step"], 1000);
        assert_eq!(v["params"]["max_points"], Value::Null);
    }

    #[test]
    fn missing_fields_apply_defaults() {
        let c: RunChoice =
            serde_json::from_value(json!({"type": "deviation", "params": {}})).unwrap();
        assert_eq!(c, RunChoice::Deviation(DeviationParameters::default()));

        let v = json!({"type": "point-count", "params": {"points": 12}});
        let c: RunChoice = serde_json::from_value(v).unwrap();
        assert_eq!(c, RunChoice::PointCount(PointCountParameters { points: 12 }));
    }

    #[test]
    fn default_params_rebuild_through_from_parts() {
        for kind in RunKind::iter() {
            let v = RunChoice::default_params(kind);
            let rebuilt = RunChoice::from_parts(kind, v).unwrap();
            let key: &'static str = kind.into();
            assert_eq!(serde_json::to_value(&rebuilt).unwrap()["type"], key);
        }
    }

    #[test]
    fn deviation_specs_come_from_schema() {
        let schema = RunChoice::schema();
        let specs = specs_for_kind(&schema, "deviation").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["deviation", "step", "reference", "max_points"]);

        let step = &specs[1];
        assert_eq!(step.title, "Step");
        assert_eq!(step.kind, FieldKind::Integer);
        assert_eq!(step.min, Some(1.0));

        let cap = &specs[3];
        assert_eq!(cap.kind, FieldKind::Integer);
        assert!(!cap.required);
    }

    #[test]
    fn discriminant_messages_available() {
        assert_eq!(RunKind::PointCount.get_message(), Some("Point count"));
        assert!(RunKind::Deviation.get_detailed_message().is_some());
        let key: &'static str = RunKind::PointCount.into();
        assert_eq!(key, "point-count");
    }
}
