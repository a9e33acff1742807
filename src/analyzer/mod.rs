pub mod engine;
pub mod ranking;
pub mod stats;
pub mod types;

pub use engine::AnalysisEngine;
pub use ranking::rank;
pub use types::{FileAnalysis, OccurrenceRecord, RunReport, SignatureHit};
