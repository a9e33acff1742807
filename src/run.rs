//! Drives a full analysis run: discovery, per-file aggregation, ranking,
//! and report rendering.

use crate::analyzer::{self, stats, AnalysisEngine, RunReport};
use crate::cli::{Cli, OutputFormat};
use crate::discovery;
use crate::error::{Result, TriageError};
use crate::reporter::html::HtmlReporter;
use crate::reporter::json::JsonReporter;
use crate::reporter::text::TextReporter;
use crate::reporter::Reporter;
use crate::signatures::{self, Signature};
use crate::timestamp::TimeWindow;
use std::collections::BTreeSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub files_analyzed: usize,
    pub files_skipped: usize,
}

pub fn run_analysis(cli: &Cli) -> Result<RunSummary> {
    let window = TimeWindow::from_bounds(cli.from_time.as_deref(), cli.to_time.as_deref())?;
    let files = discovery::discover(cli)?;
    let engine = AnalysisEngine::new().with_window(window);

    let generated_at = chrono::Local::now()
        .format("%Y-%m-%d-%H-%M-%S")
        .to_string();
    let out_path = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!("{generated_at}_analysis.{}", cli.format.extension()))
    });

    // Text and HTML are appended section by section so an interrupted run
    // leaves a valid prefix; JSON is serialized once at the end.
    let sink = ReportSink::new(out_path.clone());
    let reporter: Option<Box<dyn Reporter>> = match cli.format {
        OutputFormat::Text => Some(Box::new(TextReporter::new())),
        OutputFormat::Html => Some(Box::new(HtmlReporter::new())),
        OutputFormat::Json => None,
    };

    if let Some(r) = &reporter {
        sink.append(&r.header(&generated_at))?;
    }

    let mut report = RunReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at,
        files: Vec::new(),
        clean_files: Vec::new(),
        signatures_seen: Vec::new(),
    };
    let mut seen: BTreeSet<&'static str> = BTreeSet::new();
    let mut skipped = 0usize;

    for path in &files {
        let content = match read_log(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(file = %path.display(), %err, "skipping file");
                skipped += 1;
                continue;
            }
        };

        let mut analysis = engine.analyze_content(&content, &path.display().to_string());
        analyzer::rank(&mut analysis, cli.sort_by);
        seen.extend(analysis.signature_names());

        if analysis.is_clean() {
            report.clean_files.push(analysis.file.clone());
        } else {
            if let Some(r) = &reporter {
                sink.append(&r.file_section(&analysis))?;
            }
            report.files.push(analysis);
        }

        if cli.wants_histogram() {
            println!("\nLog volume by hour for {}", path.display());
            print!("{}", stats::render_histogram(&stats::hourly_histogram(&content)));
        }
        if cli.wants_word_count() {
            println!("\nMost frequent words in {}", path.display());
            for (word, count) in stats::word_count(&content) {
                println!("  {count:>8}  {word}");
            }
        }
    }

    report.signatures_seen = seen.into_iter().collect();
    let tips: Vec<&'static Signature> = report
        .signatures_seen
        .iter()
        .map(|name| signatures::lookup(name))
        .collect::<Result<_>>()?;

    match &reporter {
        Some(r) => {
            sink.append(&r.clean_files_section(&report.clean_files))?;
            sink.append(&r.tips_appendix(&tips))?;
            sink.append(&r.footer())?;
        }
        None => sink.append(&JsonReporter::new().report(&report)?)?,
    }

    Ok(RunSummary {
        output: out_path,
        files_analyzed: files.len() - skipped,
        files_skipped: skipped,
    })
}

fn read_log(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::InvalidData => TriageError::UnreadableFile(path.display().to_string()),
        _ => TriageError::ReadError {
            path: path.display().to_string(),
            source: e,
        },
    })
}

/// Append-only report writer, opened and flushed per write.
struct ReportSink {
    path: PathBuf,
}

impl ReportSink {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn append(&self, chunk: &str) -> Result<()> {
        if chunk.is_empty() {
            return Ok(());
        }
        let write_err = |source: std::io::Error| TriageError::WriteError {
            path: self.path.display().to_string(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        file.write_all(chunk.as_bytes()).map_err(write_err)
    }
}
