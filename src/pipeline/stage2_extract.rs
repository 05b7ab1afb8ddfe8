use crate::error::PerfError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted {
    pub score: i64,
    pub tests_ran: Option<u64>,
}

/// Pulls the single `<key>=<int>` score out of one benchmark run.
///
/// A `Running N tests` count above one fails before the metric is looked at,
/// so a filter that matches several tests never yields a mixed score.
pub fn extract_score(stdout: &str, key: &str) -> Result<Extracted, PerfError> {
    let tests_ran = find_test_count(stdout);
    if let Some(tests) = tests_ran {
        if tests > 1 {
            return Err(PerfError::MultipleTests { tests });
        }
    }

    let tokens = find_metric_tokens(stdout, key);
    let raw = match tokens.as_slice() {
        [] => {
            return Err(PerfError::MissingMetric {
                key: key.to_string(),
            });
        }
        [raw] => *raw,
        _ => {
            return Err(PerfError::MultipleMetrics {
                key: key.to_string(),
                count: tokens.len(),
            });
        }
    };

    let score = parse_metric_value(raw).ok_or_else(|| PerfError::InvalidMetric {
        key: key.to_string(),
        raw: raw.to_string(),
    })?;

    Ok(Extracted { score, tests_ran })
}

/// First `Running N test(s)` count in the output, if any.
pub fn find_test_count(text: &str) -> Option<u64> {
    for line in text.lines() {
        for (idx, marker) in line.match_indices("Running ") {
            let rest = &line[idx + marker.len()..];
            let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits_len == 0 {
                continue;
            }
            if !rest[digits_len..].trim_start().starts_with("test") {
                continue;
            }
            if let Ok(n) = rest[..digits_len].parse::<u64>() {
                return Some(n);
            }
        }
    }
    None
}

/// Raw value text of every `<key>=` token that starts on a word boundary.
pub fn find_metric_tokens<'a>(text: &'a str, key: &str) -> Vec<&'a str> {
    let pattern = format!("{key}=");
    let mut out = Vec::new();
    for (idx, _) in text.match_indices(&pattern) {
        let boundary = text[..idx]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
        if !boundary {
            continue;
        }
        let rest = text[idx + pattern.len()..].trim_start_matches([' ', '\t']);
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        out.push(&rest[..end]);
    }
    out
}

/// Leading signed integer of `raw`; trailing units are ignored, non-integers are rejected.
pub fn parse_metric_value(raw: &str) -> Option<i64> {
    let bytes = raw.as_bytes();
    let sign_len = match bytes.first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };
    let digits_len = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return None;
    }
    let end = sign_len + digits_len;
    if continues_number(&bytes[end..]) {
        return None;
    }
    raw[..end].parse::<i64>().ok()
}

/// True when the text after the integer digits is a fraction (`.5`),
/// an exponent (`e5`, `E-3`) or a thousands group (`,500`) rather than a unit.
fn continues_number(rest: &[u8]) -> bool {
    let digit_at = |i: usize| rest.get(i).is_some_and(u8::is_ascii_digit);
    match rest.first() {
        Some(b'.') | Some(b',') => digit_at(1),
        Some(b'e') | Some(b'E') => match rest.get(1) {
            Some(b'+') | Some(b'-') => digit_at(2),
            _ => digit_at(1),
        },
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_extract.rs"]
mod tests;
