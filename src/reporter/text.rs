use crate::analyzer::FileAnalysis;
use crate::reporter::markup;
use crate::reporter::Reporter;
use crate::signatures::Signature;
use comfy_table::{ContentArrangement, Table};

pub struct TextReporter;

impl TextReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TextReporter {
    fn header(&self, generated_at: &str) -> String {
        format!(
            "YugabyteDB log triage report\nGenerated at {generated_at} by logtriage v{}\n",
            env!("CARGO_PKG_VERSION")
        )
    }

    fn file_section(&self, analysis: &FileAnalysis) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "Occurrences",
            "Message",
            "First Occurrence",
            "Last Occurrence",
        ]);
        for hit in &analysis.hits {
            table.add_row(vec![
                hit.record.count.to_string(),
                hit.name.to_string(),
                hit.record.first_seen.clone().unwrap_or_default(),
                hit.record.last_seen.clone().unwrap_or_default(),
            ]);
        }

        let mut section = format!("\n\nAnalysis of {}\n\n{table}\n", analysis.file);
        if analysis.malformed_lines > 0 {
            section.push_str(&format!(
                "Note: {} matching line(s) carried no parseable timestamp\n",
                analysis.malformed_lines
            ));
        }
        section
    }

    fn clean_files_section(&self, files: &[String]) -> String {
        if files.is_empty() {
            return String::new();
        }
        let mut section = String::from("\n\nNo known issues found in:\n");
        for file in files {
            section.push_str(&format!("  - {file}\n"));
        }
        section
    }

    fn tips_appendix(&self, signatures: &[&'static Signature]) -> String {
        if signatures.is_empty() {
            return String::new();
        }
        let mut section = String::from("\n\nTroubleshooting tips\n");
        for sig in signatures {
            section.push_str(&format!(
                "\n## {}\n{}\n",
                sig.name,
                markup::render(sig.remediation, &markup::PLAIN)
            ));
        }
        section
    }
}
