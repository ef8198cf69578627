use crate::error::Result;
use crate::processors::{StepInterval, TieBreak};
use crate::utils::constants::{DEFAULT_CHART_TITLE, DEFAULT_START_TIME, ENV_PREFIX};
use crate::writers::DEFAULT_CHART_SIZE;
use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Run defaults, layered: built-in values, then an optional settings file,
/// then `CURRENT_ROSE_*` environment variables (`__` separates nested keys,
/// e.g. `CURRENT_ROSE_STEP__MINUTE=true`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub start_time: String,
    pub step: StepInterval,
    pub tie_break: TieBreak,
    pub output_dir: Option<PathBuf>,
    pub delimiter: String,
    pub chart: ChartSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub enabled: bool,
    pub size: u32,
    pub title: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_time: DEFAULT_START_TIME.to_string(),
            step: StepInterval::hourly(),
            tie_break: TieBreak::default(),
            output_dir: None,
            delimiter: ",".to_string(),
            chart: ChartSettings::default(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            size: DEFAULT_CHART_SIZE,
            title: Some(DEFAULT_CHART_TITLE.to_string()),
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`Settings::load`], reading variables from `env` instead of the
    /// process environment when it is given.
    pub fn load_with_env(path: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
