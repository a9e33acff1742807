use crate::analyzer::RunReport;
use crate::error::Result;

/// One-shot JSON rendering of the whole run. Unlike the text and HTML
/// reporters, JSON cannot be appended section by section, so the report is
/// serialized once after the last file. Remediation text ships raw, markup
/// tokens included, for downstream renderers.
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, report: &RunReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{analysis_with_hits, run_report};

    #[test]
    fn test_json_output_structure() {
        let reporter = JsonReporter::new();
        let report = run_report(vec![], vec!["quiet.log".to_string()]);
        let output = reporter.report(&report).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(parsed["clean_files"][0], "quiet.log");
        assert!(parsed["files"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_output_with_hits() {
        let reporter = JsonReporter::new();
        let analysis =
            analysis_with_hits(&[("Connection refused", 2, "0101 10:00:11", "0101 10:10:33")]);
        let report = run_report(vec![analysis], vec![]);
        let output = reporter.report(&report).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let hit = &parsed["files"][0]["hits"][0];
        assert_eq!(hit["name"], "Connection refused");
        assert_eq!(hit["count"], 2);
        assert_eq!(hit["first_seen"], "0101 10:00:11");
        assert_eq!(parsed["signatures_seen"][0], "Connection refused");
    }
}
