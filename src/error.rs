use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub const EXIT_EXECUTABLE: i32 = 1;
pub const EXIT_MISSING_METRIC: i32 = 2;
pub const EXIT_AMBIGUOUS: i32 = 3;

#[derive(Debug, Error)]
pub enum PerfError {
    #[error("benchmark executable not found; searched: {}", format_searched(.searched))]
    ExecutableNotFound { searched: Vec<PathBuf> },

    #[error("failed to start {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exited with {status}{}", .path.display(), format_stderr(.stderr_tail))]
    BenchmarkFailed {
        path: PathBuf,
        status: ExitStatus,
        stderr_tail: String,
    },

    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    ConfigValue(String),

    #[error("no `{key}=` token in benchmark output")]
    MissingMetric { key: String },

    #[error("unparseable `{key}=` value: {raw:?}")]
    InvalidMetric { key: String, raw: String },

    #[error("ambiguous benchmark output: {tests} tests ran; pass a filter selecting exactly one")]
    MultipleTests { tests: u64 },

    #[error("ambiguous benchmark output: {count} `{key}=` tokens")]
    MultipleMetrics { key: String, count: usize },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl PerfError {
    pub fn exit_code(&self) -> i32 {
        match self {
            PerfError::MissingMetric { .. } | PerfError::InvalidMetric { .. } => {
                EXIT_MISSING_METRIC
            }
            PerfError::MultipleTests { .. } | PerfError::MultipleMetrics { .. } => EXIT_AMBIGUOUS,
            PerfError::ExecutableNotFound { .. }
            | PerfError::Spawn { .. }
            | PerfError::BenchmarkFailed { .. }
            | PerfError::WorkingDir(_)
            | PerfError::ConfigIo { .. }
            | PerfError::ConfigParse { .. }
            | PerfError::ConfigValue(_)
            | PerfError::Output(_) => EXIT_EXECUTABLE,
        }
    }
}

fn format_searched(searched: &[PathBuf]) -> String {
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_stderr(tail: &str) -> String {
    if tail.is_empty() {
        String::new()
    } else {
        format!("\nstderr:\n{tail}")
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/error.rs"]
mod tests;
