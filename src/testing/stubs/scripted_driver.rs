use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// Prompt driver that answers from a script keyed by prompt title.
///
/// Unscripted prompts get their default. Every asked title and the lower
/// bound it was asked with are recorded for assertions.
#[derive(Default)]
pub struct ScriptedDriver {
    answers: HashMap<String, String>,
    selection: usize,
    asked: RefCell<Vec<(String, Option<f64>)>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, title: &str, value: &str) -> Self {
        self.answers.insert(title.to_string(), value.to_string());
        self
    }

    pub fn select(mut self, index: usize) -> Self {
        self.selection = index;
        self
    }

    pub fn was_asked(&self, title: &str) -> bool {
        self.asked.borrow().iter().any(|(t, _)| t == title)
    }

    pub fn min_for(&self, title: &str) -> Option<f64> {
        self.asked
            .borrow()
            .iter()
            .find(|(t, _)| t == title)
            .and_then(|(_, min)| *min)
    }

    fn lookup(&self, title: &str, min: Option<f64>) -> Option<&String> {
        self.asked.borrow_mut().push((title.to_string(), min));
        self.answers.get(title)
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        match self.lookup(title, None) {
            Some(v) => Ok(matches!(v.as_str(), "y" | "yes" | "true")),
            None => Ok(default),
        }
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        Ok(self
            .lookup(title, None)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        min: Option<u64>,
        _max: Option<u64>,
    ) -> Result<u64> {
        match self.lookup(title, min.map(|m| m as f64)) {
            Some(v) => v.parse().with_context(|| format!("scripted {title}")),
            None => Ok(default),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        match self.lookup(title, min) {
            Some(v) => v.parse().with_context(|| format!("scripted {title}")),
            None => Ok(default),
        }
    }

    fn ask_select(&self, title: &str, _help: Option<&str>, options: Vec<String>) -> Result<usize> {
        self.lookup(title, None);
        anyhow::ensure!(self.selection < options.len(), "no option {}", self.selection);
        Ok(self.selection)
    }
}
