//! CLI entry point for the DA score rater.
//!
//! Reads a Direct Assessment export and writes per-item averages to `1.json`
//! and per-sentence averages with the highest and lowest sentences to `2.json`.

use anyhow::{Context, Result};
use clap::Parser;
use da_score_rater::pipeline::{Pass, default_passes, run_passes};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "da_score_rater")]
#[command(about = "Average Direct Assessment scores per item and per sentence", long_about = None)]
struct Cli {
    /// CSV export with a "q1 score" column
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();

    let written = score_export(&cli.input, Path::new("."), &default_passes())?;

    for path in &written {
        info!(path = %path.display(), "Artifact ready");
    }
    Ok(())
}

/// Runs each pass in turn, naming the failing pass and its artifact in the error.
fn score_export(input: &Path, output_dir: &Path, passes: &[Pass]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(passes.len());
    for pass in passes {
        let paths = run_passes(input, output_dir, std::slice::from_ref(pass)).with_context(|| {
            format!(
                "Pass grouping {} by column {} into {} failed",
                input.display(),
                pass.group_by,
                pass.artifact.display()
            )
        })?;
        written.extend(paths);
    }
    Ok(written)
}

/// Logging setup: colored stderr, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_path = Path::new(&log_file_path);
            let log_dir = log_path.parent().unwrap_or(Path::new("logs"));
            let log_file_name = log_path
                .file_name()
                .context("LOG_FILE_PATH has no file name")?;

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?),
                );
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
