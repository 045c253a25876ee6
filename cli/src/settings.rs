use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use vecbench_core::{Operation, SweepConfig};

use crate::report::OutputFormat;

/// Sweep parameters gathered from a settings file and the command line.
///
/// Every field is optional so the two sources can be layered; unset fields
/// fall back to the dashboard defaults when resolved.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Settings {
    pub(crate) operation: Option<String>,
    pub(crate) min_size: Option<usize>,
    pub(crate) max_size: Option<usize>,
    pub(crate) count: Option<usize>,
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) format: Option<OutputFormat>,
    pub(crate) notes: Option<String>,
}

impl Settings {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("read settings file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parse settings file {}", path.display()))
    }

    pub(crate) fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str::<Settings>(raw)?)
    }

    /// Values set in `top` win over values set in `self`.
    pub(crate) fn overlay(self, top: Settings) -> Settings {
        Settings {
            operation: top.operation.or(self.operation),
            min_size: top.min_size.or(self.min_size),
            max_size: top.max_size.or(self.max_size),
            count: top.count.or(self.count),
            output_dir: top.output_dir.or(self.output_dir),
            format: top.format.or(self.format),
            notes: top.notes.or(self.notes),
        }
    }

    pub(crate) fn operation(&self) -> Result<Operation> {
        match &self.operation {
            Some(name) => Ok(name.parse::<Operation>()?),
            None => Ok(Operation::Addition),
        }
    }

    pub(crate) fn sweep_config(&self) -> Result<SweepConfig> {
        let defaults = SweepConfig::default();
        let config = SweepConfig::from_inputs(
            self.min_size.unwrap_or(defaults.min_size()),
            self.max_size.unwrap_or(defaults.max_size()),
            self.count.unwrap_or(defaults.count()),
        )?;
        Ok(config)
    }

    pub(crate) fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
