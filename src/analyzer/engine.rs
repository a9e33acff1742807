use crate::analyzer::types::FileAnalysis;
use crate::signatures::{builtin, Signature};
use crate::timestamp::{self, TimeWindow};
use tracing::trace;

/// Streams lines against the signature catalog and accumulates per-signature
/// statistics under an optional time window.
pub struct AnalysisEngine {
    catalog: &'static [Signature],
    window: TimeWindow,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self {
            catalog: builtin::catalog(),
            window: TimeWindow::unbounded(),
        }
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    /// Aggregate one file's content.
    ///
    /// Every signature is tested against every line, so a single line can
    /// feed several records. With an active window, a line whose filter
    /// timestamp cannot be parsed is excluded from matching and tallied in
    /// `malformed_lines`; without a window the occurrence is still recorded
    /// and only the display timestamps depend on extraction.
    pub fn analyze_content(&self, content: &str, file: &str) -> FileAnalysis {
        trace!(
            file,
            lines = content.lines().count(),
            signatures = self.catalog.len(),
            "matching lines against signature catalog"
        );

        let mut analysis = FileAnalysis::new(file);

        for line in content.lines() {
            let matched: Vec<&Signature> =
                self.catalog.iter().filter(|s| s.matches(line)).collect();
            if matched.is_empty() {
                continue;
            }

            if !self.window.is_unbounded() {
                match timestamp::filter_timestamp(line) {
                    Ok(ts) if self.window.contains(ts) => {}
                    Ok(_) => continue,
                    Err(_) => {
                        analysis.malformed_lines += 1;
                        continue;
                    }
                }
            }

            let seen_at = timestamp::display_timestamp(line);
            if seen_at.is_none() {
                analysis.malformed_lines += 1;
            }
            for signature in matched {
                analysis.record(signature.name, seen_at.as_deref());
            }
        }

        analysis
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
