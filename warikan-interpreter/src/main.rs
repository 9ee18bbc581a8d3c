#![warn(clippy::uninlined_format_args)]

mod config;

use config::{AppConfig, OutputFormat};
use std::{borrow::Cow, env, fs, process};
use tracing_subscriber::EnvFilter;
use warikan_application::{ProcessingOutcome, SettlementProcessor};
use warikan_i18n as i18n;
use warikan_infrastructure::JsonSnapshotParser;
use warikan_presentation::{JsonPresenter, SettlementPresenter, format_processing_failure};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

/// Logs go to stderr so report output on stdout stays machine-readable.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let Some(path) = env::args().nth(1) else {
        return Err("Usage: warikan-interpreter <snapshot.json>".into());
    };

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    tracing::debug!(?config, "Loaded configuration");

    let content = fs::read_to_string(&path)
        .map_err(|err| format!("{}: {err}", i18n::failed_to_read_snapshot(&path)))?;

    let parser = JsonSnapshotParser;
    let processor = SettlementProcessor::new(&parser, config.context);

    let snapshot = match processor.parse_snapshot(&content) {
        ProcessingOutcome::Success(snapshot) => snapshot,
        failure => {
            let message = format_processing_failure(&failure, &path).unwrap_or_default();
            return Err(message.into());
        }
    };

    let report = processor.build_report(&snapshot);
    match config.output {
        OutputFormat::Text => println!("{}", SettlementPresenter::render(&report)),
        OutputFormat::Json => {
            let document = JsonPresenter::render(&report)
                .map_err(|err| format!("Failed to serialize report: {err}"))?;
            println!("{document}");
        }
    }

    Ok(())
}
