use crate::analyzer::types::FileAnalysis;
use crate::cli::SortKey;

/// Order a file's records for presentation.
///
/// All sorts are stable, so records with equal keys keep first-match order.
/// Display timestamps compare lexicographically, which is chronological for
/// the fixed-width `"MMDD HH:MM:SS"` format within one year.
pub fn rank(analysis: &mut FileAnalysis, key: SortKey) {
    match key {
        SortKey::NumOccurrences => analysis
            .hits
            .sort_by(|a, b| b.record.count.cmp(&a.record.count)),
        SortKey::LastOccurrence => analysis
            .hits
            .sort_by(|a, b| a.record.last_seen.cmp(&b.record.last_seen)),
        SortKey::FirstOccurrence => analysis
            .hits
            .sort_by(|a, b| a.record.first_seen.cmp(&b.record.first_seen)),
    }
}
