//! Console-only extras: log-volume histogram and word frequency.
//!
//! These never go into the report file; they are printed alongside it the
//! way the full health check prints supplementary diagnostics.

use crate::timestamp;
use std::collections::HashMap;

const BAR_WIDTH: usize = 60;
const TOP_WORDS: usize = 20;

/// Line counts bucketed by display hour (`"MMDD HH"`), in chronological
/// order. Lines without an extractable timestamp are ignored.
pub fn hourly_histogram(content: &str) -> Vec<(String, u64)> {
    let mut buckets: HashMap<String, u64> = HashMap::new();
    for line in content.lines() {
        if timestamp::filter_timestamp(line).is_err() {
            continue;
        }
        if let Some(hour) = timestamp::display_timestamp(line).as_deref().and_then(|ts| ts.get(..7)) {
            *buckets.entry(hour.to_string()).or_insert(0) += 1;
        }
    }
    let mut out: Vec<_> = buckets.into_iter().collect();
    out.sort();
    out
}

/// Render histogram buckets as proportional ASCII bars.
pub fn render_histogram(buckets: &[(String, u64)]) -> String {
    let max = buckets.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max == 0 {
        return "  (no timestamped lines)\n".to_string();
    }

    let mut out = String::new();
    for (hour, count) in buckets {
        let len = ((count * BAR_WIDTH as u64) / max).max(1) as usize;
        let bar = format!("{:<width$}", "#".repeat(len), width = BAR_WIDTH);
        out.push_str(&format!("  {hour}  {bar}  {count}\n"));
    }
    out
}

/// The most frequent whitespace-delimited words, descending by count with
/// alphabetical tie-break for determinism.
pub fn word_count(content: &str) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for word in content.split_whitespace() {
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut out: Vec<_> = counts
        .into_iter()
        .map(|(w, n)| (w.to_string(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out.truncate(TOP_WORDS);
    out
}
