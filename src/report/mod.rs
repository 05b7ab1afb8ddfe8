pub mod text;

use crate::model::samples::ScoreSeries;

pub const DEFAULT_TRIM_FRACTION: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedSummary {
    pub per_tail: usize,
    pub kept: usize,
    pub mean: f64,
    pub stddev: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub last: i64,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub stddev: f64,
    pub trimmed: TrimmedSummary,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sum = 0f64;
    for &v in values {
        sum += v as f64;
    }
    sum / values.len() as f64
}

/// Divides by N, not N-1.
pub fn population_stddev(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let mut acc = 0f64;
    for &v in values {
        let d = v as f64 - m;
        acc += d * d;
    }
    (acc / values.len() as f64).sqrt()
}

/// Largest per-tail count that still leaves one element.
fn max_per_tail(len: usize) -> usize {
    len.saturating_sub(1) / 2
}

pub fn trim_count(len: usize, fraction: f64) -> usize {
    if len == 0 || fraction <= 0.0 {
        return 0;
    }
    let n = (len as f64 * fraction).floor() as usize;
    n.min(max_per_tail(len))
}

/// Sorted copy of `values` with `n` elements dropped from each tail.
pub fn trim_tails(values: &[i64], n: usize) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = n.min(max_per_tail(sorted.len()));
    sorted[n..sorted.len() - n].to_vec()
}

pub fn truncated_mean(values: &[i64], n: usize) -> f64 {
    mean(&trim_tails(values, n))
}

pub fn truncated_stddev(values: &[i64], n: usize) -> f64 {
    population_stddev(&trim_tails(values, n))
}

pub fn summarize(series: &ScoreSeries, trim_fraction: f64) -> Summary {
    let values = series.as_slice();
    let per_tail = trim_count(values.len(), trim_fraction);

    Summary {
        count: values.len(),
        last: series.last().unwrap_or(0),
        min: values.iter().copied().min().unwrap_or(0),
        max: values.iter().copied().max().unwrap_or(0),
        mean: mean(values),
        stddev: population_stddev(values),
        trimmed: TrimmedSummary {
            per_tail,
            kept: values.len() - 2 * per_tail,
            mean: truncated_mean(values, per_tail),
            stddev: truncated_stddev(values, per_tail),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
