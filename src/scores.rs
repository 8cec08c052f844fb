//! Score extraction: validates each row's `q1 score` and buckets it by a
//! grouping column.

use csv::StringRecord;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Result, ScoreError};
use crate::source::ScoreSource;

/// Column holding the sentence identifier.
pub const SENTENCE_COLUMN: usize = 0;
/// Column holding the item identifier.
pub const ITEM_COLUMN: usize = 2;

pub const MAX_SCORE: u8 = 100;

/// Zero-based index of the column whose value keys each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupColumn(pub usize);

impl FromStr for GroupColumn {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(GroupColumn)
            .map_err(|_| ScoreError::ColumnNotInteger {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for GroupColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scores per grouping key. Keys keep first-encounter order and each key's
/// scores keep row order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScoreTable {
    groups: Vec<(String, Vec<u8>)>,
    index: HashMap<String, usize>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, score: u8) {
        match self.index.get(key) {
            Some(&i) => self.groups[i].1.push(score),
            None => {
                self.index.insert(key.to_string(), self.groups.len());
                self.groups.push((key.to_string(), vec![score]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.index.get(key).map(|&i| self.groups[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Parses a score field. Only plain ASCII digits in `0..=100` are accepted.
pub fn parse_score(field: &str) -> Option<u8> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Long digit strings overflow u32 and are out of range anyway.
    let value: u32 = field.parse().ok()?;
    if value > MAX_SCORE as u32 {
        return None;
    }
    Some(value as u8)
}

/// Reads every data row of `source` and groups the validated scores by the
/// value in `column`. The first bad row aborts the whole read.
pub fn extract(source: &ScoreSource, column: GroupColumn) -> Result<ScoreTable> {
    let records = source.records()?;
    let score_column = records.score_column();
    let mut table = ScoreTable::new();

    let mut rows = 0usize;
    for (i, row) in records.enumerate() {
        let row = row?;
        let line = i + 1;
        let score = row_score(&row, score_column, line)?;

        let key = row.get(column.0).ok_or(ScoreError::ColumnOutOfRange {
            column: column.0,
            line,
        })?;
        table.push(key, score);
        rows = line;
    }

    debug!(
        path = %source.path().display(),
        %column,
        rows,
        groups = table.len(),
        "Extracted scores"
    );
    Ok(table)
}

fn row_score(row: &StringRecord, score_column: usize, line: usize) -> Result<u8> {
    let field = row.get(score_column).ok_or(ScoreError::ColumnOutOfRange {
        column: score_column,
        line,
    })?;

    parse_score(field).ok_or_else(|| ScoreError::InvalidScore {
        score: field.to_string(),
        item: row.get(ITEM_COLUMN).unwrap_or_default().to_string(),
        sentence: row.get(SENTENCE_COLUMN).unwrap_or_default().to_string(),
        line,
    })
}
