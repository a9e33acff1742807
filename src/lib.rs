pub mod analyzer;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod reporter;
pub mod run;
pub mod signatures;
pub mod timestamp;

#[cfg(test)]
pub mod test_utils;

pub use analyzer::{AnalysisEngine, FileAnalysis, OccurrenceRecord, RunReport};
pub use cli::{Cli, OutputFormat, SortKey};
pub use error::{Result, TriageError};
pub use reporter::{
    html::HtmlReporter, json::JsonReporter, text::TextReporter, Reporter,
};
pub use signatures::{catalog, lookup, Signature};
pub use timestamp::TimeWindow;
