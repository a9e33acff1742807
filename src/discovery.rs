//! Resolves the list of files to analyze: explicit paths, recursive
//! directory walks, and one-shot tar.gz extraction.

use crate::cli::Cli;
use crate::error::{Result, TriageError};
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Resolve every file the run should scan, in deterministic order.
///
/// Archive extraction happens before any file is scanned; the unpacked
/// directory is then walked like any other directory source.
pub fn discover(cli: &Cli) -> Result<Vec<PathBuf>> {
    if cli.log_files.is_empty() && cli.directory.is_none() && cli.archive.is_none() {
        return Err(TriageError::NoInput);
    }

    let mut files: Vec<PathBuf> = cli.log_files.clone();

    if let Some(dir) = &cli.directory {
        files.extend(walk_logs(dir));
    }

    if let Some(archive) = &cli.archive {
        let extracted = extract_archive(archive)?;
        files.extend(walk_logs(&extracted));
    }

    files.sort();
    files.dedup();
    debug!(count = files.len(), "resolved files to analyze");
    Ok(files)
}

/// All `*.log` files under `dir`, including nested directories.
fn walk_logs(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("log"))
        })
        .map(|e| e.into_path())
        .collect()
}

/// Unpack a tar.gz bundle into a fresh directory named by run timestamp,
/// next to the archive.
pub fn extract_archive(path: &Path) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let dest = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{stamp}_extracted"));

    let archive_err = |source: std::io::Error| TriageError::Archive {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(archive_err)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive.unpack(&dest).map_err(archive_err)?;

    debug!(dest = %dest.display(), "extracted archive");
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn cli_for(args: &[&str]) -> Cli {
        let mut full = vec!["logtriage"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_no_input_is_an_error() {
        let err = discover(&cli_for(&[])).unwrap_err();
        assert!(matches!(err, TriageError::NoInput));
    }

    #[test]
    fn test_explicit_files_pass_through() {
        let cli = cli_for(&["-l", "b.log", "a.log"]);
        let files = discover(&cli).unwrap();
        // Sorted for a deterministic run order.
        assert_eq!(files, [PathBuf::from("a.log"), PathBuf::from("b.log")]);
    }

    #[test]
    fn test_directory_walk_finds_only_log_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("master.log"), "x").unwrap();
        fs::write(dir.path().join("nested/tserver.log"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let cli = cli_for(&["-d", dir.path().to_str().unwrap()]);
        let files = discover(&cli).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "log"));
    }

    #[test]
    fn test_duplicate_inputs_are_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("master.log");
        fs::write(&log, "x").unwrap();

        let log_str = log.to_str().unwrap();
        let cli = cli_for(&["-l", log_str, log_str]);
        let files = discover(&cli).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_extract_archive_missing_file() {
        let err = extract_archive(Path::new("/nonexistent/bundle.tar.gz")).unwrap_err();
        assert!(matches!(err, TriageError::Archive { .. }));
    }

    #[test]
    fn test_extract_archive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("support.tar.gz");

        // Build a small tar.gz holding one log file.
        let tar_gz = File::create(&bundle).unwrap();
        let enc = flate2::write::GzEncoder::new(tar_gz, flate2::Compression::default());
        let mut builder = tar::Builder::new(enc);
        let content = b"I0101 10:00:00.000000 1 a.cc:1] Connection refused\n";
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, "logs/tserver.log", content.as_slice())
            .unwrap();
        builder.into_inner().unwrap().finish().unwrap();

        let extracted = extract_archive(&bundle).unwrap();
        let files = walk_logs(&extracted);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("logs/tserver.log"));
    }
}
