//! Runs the scoring passes over one export.
//!
//! Each pass opens its own [`ScoreSource`] and threads its tables through by
//! value, so nothing carries over between passes.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::aggregate::compute_averages;
use crate::analyzers::extremes::compute_extremes;
use crate::error::Result;
use crate::output::{ScoreReport, print_json, write_report};
use crate::scores::{GroupColumn, ITEM_COLUMN, SENTENCE_COLUMN, extract};
use crate::source::ScoreSource;

/// One extraction, aggregation and write.
#[derive(Debug, Clone, PartialEq)]
pub struct Pass {
    pub group_by: GroupColumn,
    pub extremes: bool,
    pub artifact: PathBuf,
}

/// Averages per item into `1.json`, then averages and extremes per sentence
/// into `2.json`.
pub fn default_passes() -> Vec<Pass> {
    vec![
        Pass {
            group_by: GroupColumn(ITEM_COLUMN),
            extremes: false,
            artifact: PathBuf::from("1.json"),
        },
        Pass {
            group_by: GroupColumn(SENTENCE_COLUMN),
            extremes: true,
            artifact: PathBuf::from("2.json"),
        },
    ]
}

/// Builds the report for `pass` without touching the filesystem beyond
/// reading `input`.
#[tracing::instrument(skip(pass), fields(group_by = %pass.group_by, extremes = pass.extremes))]
pub fn run_pass(input: &Path, pass: &Pass) -> Result<ScoreReport> {
    let source = ScoreSource::open(input)?;
    let table = extract(&source, pass.group_by)?;
    let averages = compute_averages(&table);
    debug!(groups = averages.len(), "Averages computed");

    let extremes = if pass.extremes {
        Some(compute_extremes(&averages)?)
    } else {
        None
    };

    let report = ScoreReport::build(Some(&averages), extremes.as_ref());
    print_json(&report)?;
    Ok(report)
}

/// Runs `passes` in order, writing each artifact under `output_dir`.
///
/// Stops at the first failing pass; artifacts already written stay on disk
/// and the failing pass writes nothing.
pub fn run_passes(input: &Path, output_dir: &Path, passes: &[Pass]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(passes.len());
    for pass in passes {
        let report = run_pass(input, pass)?;
        let path = output_dir.join(&pass.artifact);
        write_report(&path, &report)?;
        written.push(path);
    }

    info!(input = %input.display(), artifacts = written.len(), "All passes complete");
    Ok(written)
}
