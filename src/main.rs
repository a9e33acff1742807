use clap::Parser;
use colored::Colorize;
use logtriage::{run, Cli, TriageError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run::run_analysis(&cli) {
        Ok(summary) => {
            println!(
                "Analysis complete: {} file(s) analyzed, {} skipped. Results are in {}",
                summary.files_analyzed,
                summary.files_skipped,
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err @ TriageError::NoInput) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "logtriage=debug"
    } else {
        "logtriage=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
