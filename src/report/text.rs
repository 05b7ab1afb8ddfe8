use std::path::Path;

use crate::report::{Summary, format_f64_2};

pub fn render_header(executable: &Path, filter: Option<&str>, trim_fraction: f64) -> String {
    format!(
        "Benchmark: {}\nFilter: {}\nTrim fraction: {} per tail",
        executable.display(),
        filter.unwrap_or("(none)"),
        format_f64_2(trim_fraction)
    )
}

pub fn render_summary_line(summary: &Summary) -> String {
    format!(
        "#{} score={} mean={} stddev={} trimmed[{}/tail n={}]: mean={} stddev={} range=[{}, {}]",
        summary.count,
        summary.last,
        format_f64_2(summary.mean),
        format_f64_2(summary.stddev),
        summary.trimmed.per_tail,
        summary.trimmed.kept,
        format_f64_2(summary.trimmed.mean),
        format_f64_2(summary.trimmed.stddev),
        summary.min,
        summary.max
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
