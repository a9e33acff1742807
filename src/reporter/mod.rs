pub mod html;
pub mod json;
pub mod markup;
pub mod text;

use crate::analyzer::FileAnalysis;
use crate::signatures::Signature;

/// Renders report sections for one output format.
///
/// Sections are appended to the report file as the run progresses, so an
/// interrupted run leaves a valid prefix. The remediation appendix covers
/// only signatures that occurred somewhere in the run, never the whole
/// catalog.
pub trait Reporter {
    fn header(&self, generated_at: &str) -> String;
    fn file_section(&self, analysis: &FileAnalysis) -> String;
    fn clean_files_section(&self, files: &[String]) -> String;
    fn tips_appendix(&self, signatures: &[&'static Signature]) -> String;
    fn footer(&self) -> String {
        String::new()
    }
}
