//! Report assembly and JSON persistence.
//!
//! Only populated facets make it into the document, and the file is always
//! overwritten.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::{AverageTable, Extremes, Extremum};
use crate::error::Result;

const INDENT: &[u8] = b"    ";

/// The document written for one pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub averages: Option<AverageTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<Extremum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest: Option<Extremum>,
}

impl ScoreReport {
    /// Keeps `averages` only when non-empty and each extremum only when it
    /// names at least one key.
    pub fn build(averages: Option<&AverageTable>, extremes: Option<&Extremes>) -> Self {
        let named = |e: &Extremum| (!e.names.is_empty()).then(|| e.clone());
        Self {
            averages: averages.filter(|a| !a.is_empty()).cloned(),
            highest: extremes.and_then(|e| named(&e.highest)),
            lowest: extremes.and_then(|e| named(&e.lowest)),
        }
    }

    /// Pretty JSON with a four-space indent.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        write_pretty(&mut buf, self)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn write_pretty<W: Write>(writer: W, report: &ScoreReport) -> Result<()> {
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut ser)?;
    Ok(())
}

/// Logs a report as pretty-printed JSON.
pub fn print_json(report: &ScoreReport) -> Result<()> {
    debug!("{}", report.to_json_pretty()?);
    Ok(())
}

/// Writes `report` to `path`, replacing any existing file.
pub fn write_report(path: &Path, report: &ScoreReport) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_pretty(&mut writer, report)?;
    writer.flush()?;

    info!(path = %path.display(), "Report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::extremes::compute_extremes;
    use std::fs;

    fn averages(entries: &[(&str, f64)]) -> AverageTable {
        entries.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_averages_only_document() {
        let report = ScoreReport::build(Some(&averages(&[("i1", 18.33)])), None);
        let json = report.to_json_pretty().unwrap();

        assert_eq!(json, "{\n    \"averages\": {\n        \"i1\": 18.33\n    }\n}");
        assert!(!json.contains("highest"));
        assert!(!json.contains("lowest"));
    }

    #[test]
    fn test_full_document_field_order() {
        let avgs = averages(&[("s1", 50.0), ("s2", 10.0)]);
        let extremes = compute_extremes(&avgs).unwrap();
        let json = ScoreReport::build(Some(&avgs), Some(&extremes))
            .to_json_pretty()
            .unwrap();

        let expected = r#"{
    "averages": {
        "s1": 50.0,
        "s2": 10.0
    },
    "highest": {
        "names": [
            "s1"
        ],
        "value": 50.0
    },
    "lowest": {
        "names": [
            "s2"
        ],
        "value": 10.0
    }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_facets_are_omitted() {
        let extremes = Extremes {
            highest: Extremum::starting_at(0.0),
            lowest: Extremum::starting_at(100.0),
        };
        let report = ScoreReport::build(Some(&AverageTable::default()), Some(&extremes));

        assert_eq!(report, ScoreReport::default());
        assert_eq!(report.to_json_pretty().unwrap(), "{}");
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&ScoreReport::default()).unwrap();
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.json");
        fs::write(&path, "stale content that is longer than the report").unwrap();

        let report = ScoreReport::build(Some(&averages(&[("i1", 75.0)])), None);
        write_report(&path, &report).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, report.to_json_pretty().unwrap());
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["averages"]["i1"], 75.0);
    }
}
