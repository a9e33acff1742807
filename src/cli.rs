use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Presentation order for a file's aggregated records.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by occurrence count
    #[value(alias = "no")]
    NumOccurrences,
    /// Ascending by last occurrence
    #[value(alias = "lo")]
    LastOccurrence,
    /// Ascending by first occurrence
    #[default]
    #[value(alias = "fo")]
    FirstOccurrence,
}

#[derive(Parser, Debug)]
#[command(
    name = "logtriage",
    version,
    about = "Troubleshooting report generator for YugabyteDB log files",
    long_about = "logtriage scans YugabyteDB master/tserver logs for known error signatures, \
aggregates per-signature occurrence statistics, and writes a troubleshooting report with \
remediation tips for every signature seen."
)]
pub struct Cli {
    /// Log files to analyze
    #[arg(short = 'l', long = "log-files", num_args = 1.., value_name = "FILE")]
    pub log_files: Vec<PathBuf>,

    /// Directory to search recursively for *.log files
    #[arg(short = 'd', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// tar.gz support bundle to extract and analyze
    #[arg(short = 'z', long, value_name = "TAR_GZ")]
    pub archive: Option<PathBuf>,

    /// Only count occurrences at or after this time
    #[arg(short = 't', long = "from-time", value_name = "MMDD HH:MM")]
    pub from_time: Option<String>,

    /// Only count occurrences at or before this time
    #[arg(short = 'T', long = "to-time", value_name = "MMDD HH:MM")]
    pub to_time: Option<String>,

    /// Sort key for each file's results
    #[arg(short = 's', long = "sort-by", value_enum, default_value_t = SortKey::FirstOccurrence)]
    pub sort_by: SortKey,

    /// Report format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report path (default: <timestamp>_analysis.<ext>)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print a per-hour log volume histogram to stdout
    #[arg(short = 'H', long)]
    pub histogram: bool,

    /// Print the 20 most frequent words to stdout
    #[arg(short = 'w', long = "word-count")]
    pub word_count: bool,

    /// Full health check: histogram and word count together
    #[arg(short = 'A', long)]
    pub all: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn wants_histogram(&self) -> bool {
        self.histogram || self.all
    }

    pub fn wants_word_count(&self) -> bool {
        self.word_count || self.all
    }
}
