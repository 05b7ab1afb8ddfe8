use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::PerfError;

const STDERR_TAIL_LINES: usize = 20;

#[derive(Debug, Clone)]
pub struct Invocation {
    pub stdout: String,
    pub stderr: String,
}

/// Runs the benchmark once and blocks until it exits.
pub fn invoke_benchmark(executable: &Path, args: &[String]) -> Result<Invocation, PerfError> {
    tracing::debug!("running {} {}", executable.display(), args.join(" "));

    let output = Command::new(executable)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| PerfError::Spawn {
            path: executable.to_path_buf(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(PerfError::BenchmarkFailed {
            path: executable.to_path_buf(),
            status: output.status,
            stderr_tail: tail_lines(&stderr, STDERR_TAIL_LINES),
        });
    }

    Ok(Invocation { stdout, stderr })
}

pub fn tail_lines(text: &str, n: usize) -> String {
    let lines = text.lines().collect::<Vec<_>>();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_invoke.rs"]
mod tests;
