use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PerfError;

pub const DEFAULT_CONFIG_NAME: &str = "perfloop.json";
pub const DEFAULT_FILTER_FLAG: &str = "--gtest_filter=";
pub const DEFAULT_METRIC_KEY: &str = "metric";

/// On-disk shape of `perfloop.json`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub executable: Option<PathBuf>,
    pub args: Vec<String>,
    pub filter_flag: Option<String>,
    pub metric_key: Option<String>,
    pub trim_fraction: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub file: ConfigFile,
}

impl LoadedConfig {
    /// Relative `executable` entries are taken relative to the config file.
    pub fn executable(&self) -> Option<PathBuf> {
        let exe = self.file.executable.as_ref()?;
        let base = self.path.parent().unwrap_or(Path::new(""));
        Some(base.join(exe))
    }
}

pub fn parse_config(path: &Path, contents: &str) -> Result<ConfigFile, PerfError> {
    serde_json::from_str(contents).map_err(|source| PerfError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// An explicit path must exist; the default `perfloop.json` is optional.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<LoadedConfig>, PerfError> {
    let path = match explicit {
        Some(p) => cwd.join(p),
        None => {
            let default = cwd.join(DEFAULT_CONFIG_NAME);
            if !default.is_file() {
                tracing::debug!("no {} in {}", DEFAULT_CONFIG_NAME, cwd.display());
                return Ok(None);
            }
            default
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|source| PerfError::ConfigIo {
        path: path.clone(),
        source,
    })?;
    let file = parse_config(&path, &contents)?;
    tracing::info!("loaded config {}", path.display());
    Ok(Some(LoadedConfig { path, file }))
}

pub fn validate_trim_fraction(fraction: f64) -> Result<f64, PerfError> {
    if fraction.is_finite() && (0.0..0.5).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(PerfError::ConfigValue(format!(
            "trim_fraction must be in [0.0, 0.5), got {fraction}"
        )))
    }
}
