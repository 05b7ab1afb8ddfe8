use std::path::{Path, PathBuf};

use crate::error::PerfError;

pub const DEFAULT_CANDIDATES: &[&str] = &[
    "out/Release/perf_tests",
    "out/Default/perf_tests",
    "build/perf_tests",
    "target/release/perf_tests",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutableSource {
    /// `--exe` or `PERFLOOP_EXE`.
    Explicit,
    ConfigFile,
    Builtin,
}

#[derive(Debug, Clone)]
pub struct ExecutableResolution {
    pub path: PathBuf,
    pub source: ExecutableSource,
}

pub fn locate_executable(
    explicit: Option<&Path>,
    from_config: Option<&Path>,
    cwd: &Path,
) -> Result<ExecutableResolution, PerfError> {
    if let Some(path) = explicit {
        return require_file(cwd.join(path), ExecutableSource::Explicit);
    }
    if let Some(path) = from_config {
        return require_file(cwd.join(path), ExecutableSource::ConfigFile);
    }

    let mut searched = Vec::with_capacity(DEFAULT_CANDIDATES.len());
    for name in DEFAULT_CANDIDATES {
        let path = cwd.join(name);
        if path.is_file() {
            return Ok(ExecutableResolution {
                path,
                source: ExecutableSource::Builtin,
            });
        }
        searched.push(path);
    }
    Err(PerfError::ExecutableNotFound { searched })
}

fn require_file(
    path: PathBuf,
    source: ExecutableSource,
) -> Result<ExecutableResolution, PerfError> {
    if path.is_file() {
        Ok(ExecutableResolution { path, source })
    } else {
        Err(PerfError::ExecutableNotFound {
            searched: vec![path],
        })
    }
}
