pub mod stage1_invoke;
pub mod stage2_extract;

use std::io::Write;

use crate::error::PerfError;
use crate::input::RunnerConfig;
use crate::model::samples::ScoreSeries;
use crate::report::summarize;
use crate::report::text::{render_header, render_summary_line};
use stage1_invoke::invoke_benchmark;
use stage2_extract::extract_score;

/// Invoke, extract, summarize, print. Runs until `config.runs` samples
/// are collected, or forever when no limit is set.
pub fn run_loop<W: Write>(config: &RunnerConfig, out: &mut W) -> Result<ScoreSeries, PerfError> {
    let args = config.command_args();
    writeln!(
        out,
        "{}",
        render_header(
            &config.executable,
            config.filter.as_deref(),
            config.trim_fraction
        )
    )?;
    out.flush()?;

    let mut series = ScoreSeries::new();
    loop {
        if let Some(limit) = config.runs {
            if series.len() as u64 >= limit {
                break;
            }
        }

        let run = invoke_benchmark(&config.executable, &args)?;
        if !run.stderr.is_empty() {
            tracing::debug!("benchmark stderr:\n{}", run.stderr.trim_end());
        }

        let extracted = extract_score(&run.stdout, &config.metric_key)?;
        tracing::debug!(
            "score {} (tests ran: {:?})",
            extracted.score,
            extracted.tests_ran
        );
        series.push(extracted.score);

        let summary = summarize(&series, config.trim_fraction);
        writeln!(out, "{}", render_summary_line(&summary))?;
        out.flush()?;
    }

    if series.is_empty() {
        tracing::warn!("run limit is zero; benchmark never invoked");
    } else {
        tracing::info!("collected {} samples", series.len());
    }
    Ok(series)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
