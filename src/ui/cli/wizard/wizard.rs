use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{
    EstimatorParams, FieldKind, FieldSpec, RunChoice, RunConfig, UIChoice, schema_for,
    specs_for_kind, specs_for_struct,
};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_labels<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

/// Asks for the estimator settings, then for the estimation mode.
pub fn prompt_run_config<D: PromptDriver>(driver: &D) -> Result<RunConfig> {
    let estimator = prompt_params::<EstimatorParams, _>(driver)?;
    let run = prompt_choice::<RunChoice, _>(driver)?;
    Ok(RunConfig { estimator, run })
}

/// Prompts every field of a plain parameter struct.
pub fn prompt_params<T, D>(driver: &D) -> Result<T>
where
    T: JsonSchema + DeserializeOwned,
    D: PromptDriver,
{
    let specs = specs_for_struct(&schema_for::<T>())?;
    let params = prompt_fields(driver, &specs, &Value::Null)?;
    Ok(serde_json::from_value(Value::Object(params))?)
}

/// Lets the user pick a variant of a tagged enum, then prompts its params.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let mut items = kind_labels::<C::Kind>();
    let labels = items.iter().map(|(_, text)| text.clone()).collect();

    let idx = driver.ask_select(C::prompt_label(), C::prompt_help(), labels)?;
    let (choice_kind, _) = items.swap_remove(idx);

    let key: &'static str = choice_kind.into();
    let specs = specs_for_kind(&C::schema(), key)?;
    let defaults = C::default_params(choice_kind);

    let params = prompt_fields(driver, &specs, &defaults)?;
    C::from_parts(choice_kind, Value::Object(params))
}

fn prompt_fields<D: PromptDriver>(
    driver: &D,
    specs: &[FieldSpec],
    defaults: &Value,
) -> Result<Map<String, Value>> {
    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        if let Some(val) = prompt_field(driver, s, init)? {
            params.insert(s.name.clone(), val);
        }
    }
    Ok(params)
}

fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    let is_optional_numeric = !s.required
        && matches!(s.kind, FieldKind::Integer | FieldKind::Number)
        && matches!(init, None | Some(Value::Null));

    if is_optional_numeric {
        let answer = driver.ask_string(&s.title, &format!("{help}\n(leave blank for none)"), "")?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let val = match s.kind {
            FieldKind::Integer => Value::from(
                answer
                    .parse::<u64>()
                    .with_context(|| format!("invalid integer for {}", s.title))?,
            ),
            _ => Value::from(
                answer
                    .parse::<f64>()
                    .with_context(|| format!("invalid number for {}", s.title))?,
            ),
        };
        return Ok(Some(val));
    }

    let val = match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
    };
    Ok(Some(val))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedDriver;
    use crate::ui::types::choices::{DeviationParameters, PointCountParameters};
    use std::f64::consts::PI;

    #[test]
    fn defaults_everywhere_give_a_point_count_run() {
        let driver = ScriptedDriver::new().select(0);
        let cfg = prompt_run_config(&driver).unwrap();
        assert_eq!(cfg, RunConfig::default());
        assert!(driver.was_asked("Dimensions"));
        assert!(driver.was_asked("Points"));
        assert!(!driver.was_asked("Step"));
    }

    #[test]
    fn deviation_flow_uses_answers_and_defaults() {
        let driver = ScriptedDriver::new()
            .answer("Dimensions", "3")
            .answer("Seed", "17")
            .answer("Deviation", "0.01")
            .answer("Max Points", "500000")
            .select(1);

        let cfg = prompt_run_config(&driver).unwrap();
        assert_eq!(cfg.estimator.dimensions, 3);
        assert_eq!(cfg.estimator.seed, Some(17));
        assert_eq!(cfg.estimator.log_capacity, None);
        assert_eq!(
            cfg.run,
            RunChoice::Deviation(DeviationParameters {
                deviation: 0.01,
                step: 1000,
                reference: PI,
                max_points: Some(500_000),
            })
        );
    }

    #[test]
    fn bounds_from_schema_reach_the_driver() {
        let driver = ScriptedDriver::new().select(0).answer("Points", "12");
        let run = prompt_choice::<RunChoice, _>(&driver).unwrap();
        assert_eq!(run, RunChoice::PointCount(PointCountParameters { points: 12 }));
        assert_eq!(driver.min_for("Points"), Some(1.0));
    }

    #[test]
    fn garbage_in_optional_field_is_an_error() {
        let driver = ScriptedDriver::new().answer("Seed", "soon");
        let err = prompt_params::<EstimatorParams, _>(&driver).unwrap_err();
        assert!(err.to_string().contains("invalid integer for Seed"));
    }
}
