#[cfg(test)]
pub mod fixtures {
    use crate::analyzer::{FileAnalysis, OccurrenceRecord, RunReport, SignatureHit};
    use std::collections::BTreeSet;

    /// Three-line scenario: lines 1 and 3 match "Connection refused", line 2
    /// matches "Clock skew detected", timestamped 10:00 / 10:05 / 10:10.
    pub fn three_line_log() -> &'static str {
        "I0101 10:00:11.000000 1 net.cc:1] Connect failed: Connection refused\n\
         F0101 10:05:22.000000 1 hybrid_clock.cc:149] Too big clock skew is detected: 0.5s\n\
         I0101 10:10:33.000000 1 net.cc:1] Connect failed: Connection refused\n"
    }

    pub fn analysis_with_hits(rows: &[(&'static str, u64, &str, &str)]) -> FileAnalysis {
        let mut analysis = FileAnalysis::new("test.log");
        for &(name, count, first, last) in rows {
            analysis.hits.push(SignatureHit {
                name,
                record: OccurrenceRecord {
                    count,
                    first_seen: Some(first.to_string()),
                    last_seen: Some(last.to_string()),
                },
            });
        }
        analysis
    }

    pub fn run_report(files: Vec<FileAnalysis>, clean_files: Vec<String>) -> RunReport {
        let signatures_seen: BTreeSet<_> =
            files.iter().flat_map(|f| f.signature_names()).collect();
        RunReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: "2026-08-06-10-00-00".to_string(),
            files,
            clean_files,
            signatures_seen: signatures_seen.into_iter().collect(),
        }
    }
}
