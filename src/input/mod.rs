use std::path::{Path, PathBuf};

pub mod config;
pub mod locate;

use config::{
    DEFAULT_FILTER_FLAG, DEFAULT_METRIC_KEY, LoadedConfig, load_config, validate_trim_fraction,
};
use locate::{ExecutableSource, locate_executable};

use crate::error::PerfError;
use crate::report::DEFAULT_TRIM_FRACTION;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub exe: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub filter: Option<String>,
    pub trim_fraction: Option<f64>,
    pub metric_key: Option<String>,
    pub runs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub executable: PathBuf,
    pub executable_source: ExecutableSource,
    pub args: Vec<String>,
    pub filter: Option<String>,
    pub filter_flag: String,
    pub metric_key: String,
    pub trim_fraction: f64,
    pub runs: Option<u64>,
}

impl RunnerConfig {
    /// Arguments for one benchmark invocation, filter last.
    pub fn command_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        if let Some(filter) = &self.filter {
            args.push(format!("{}{}", self.filter_flag, filter));
        }
        args
    }
}

pub fn resolve_config(overrides: &Overrides, cwd: &Path) -> Result<RunnerConfig, PerfError> {
    let loaded = load_config(overrides.config.as_deref(), cwd)?;
    let file = loaded.as_ref().map(|l| l.file.clone()).unwrap_or_default();
    let config_exe = loaded.as_ref().and_then(LoadedConfig::executable);

    let resolution = locate_executable(overrides.exe.as_deref(), config_exe.as_deref(), cwd)?;

    // A bad file value fails even when the command line overrides it.
    if let Some(fraction) = file.trim_fraction {
        validate_trim_fraction(fraction)?;
    }
    let trim_fraction = validate_trim_fraction(
        overrides
            .trim_fraction
            .or(file.trim_fraction)
            .unwrap_or(DEFAULT_TRIM_FRACTION),
    )?;

    let metric_key = overrides
        .metric_key
        .clone()
        .or(file.metric_key)
        .unwrap_or_else(|| DEFAULT_METRIC_KEY.to_string());
    if metric_key.is_empty() || metric_key.contains(|c: char| c.is_whitespace() || c == '=') {
        return Err(PerfError::ConfigValue(format!(
            "metric key must be a non-empty word without `=`, got {metric_key:?}"
        )));
    }

    Ok(RunnerConfig {
        executable: resolution.path,
        executable_source: resolution.source,
        args: file.args,
        filter: overrides.filter.clone(),
        filter_flag: file
            .filter_flag
            .unwrap_or_else(|| DEFAULT_FILTER_FLAG.to_string()),
        metric_key,
        trim_fraction,
        runs: overrides.runs,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
