//! CSV record source for a Direct Assessment export.
//!
//! Every call to [`ScoreSource::records`] reopens the file, so each pass reads
//! the export from the top and drops its handle when the iterator is dropped.

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, ScoreError};

/// Header of the column holding the per-row score. Matched exactly.
pub const SCORE_HEADER: &str = "q1 score";

/// A validated path to an existing export.
#[derive(Debug, Clone)]
pub struct ScoreSource {
    path: PathBuf,
}

impl ScoreSource {
    /// Resolves `path` to an absolute path and checks that it is a regular file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if !path.is_file() {
            return Err(ScoreError::NotFound { path });
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file fresh and positions the reader after the header row.
    pub fn records(&self) -> Result<ScoreRecords> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let score_column = reader
            .headers()?
            .iter()
            .position(|name| name == SCORE_HEADER)
            .ok_or_else(|| ScoreError::MissingScoreColumn {
                path: self.path.clone(),
            })?;
        debug!(path = %self.path.display(), score_column, "Located score column");

        Ok(ScoreRecords {
            score_column,
            inner: reader.into_records(),
        })
    }
}

/// Lazy iterator over the data rows of one read of the export.
pub struct ScoreRecords {
    score_column: usize,
    inner: StringRecordsIntoIter<File>,
}

impl ScoreRecords {
    /// Index of the `q1 score` column in this file's header.
    pub fn score_column(&self) -> usize {
        self.score_column
    }
}

impl Iterator for ScoreRecords {
    type Item = Result<StringRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|row| row.map_err(ScoreError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScoreSource::open(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(ScoreError::NotFound { .. })));
    }

    #[test]
    fn test_open_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScoreSource::open(dir.path());
        assert!(matches!(result, Err(ScoreError::NotFound { .. })));
    }

    #[test]
    fn test_locates_score_column() {
        let file = csv_file("sid,src,item,q1 score\ns1,a,i1,50\n");
        let source = ScoreSource::open(file.path()).unwrap();
        let records = source.records().unwrap();
        assert_eq!(records.score_column(), 3);

        let rows: Vec<_> = records.collect::<Result<_>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "s1");
    }

    #[test]
    fn test_score_header_match_is_exact() {
        let file = csv_file("sid,src,item,Q1 Score, q1 score\ns1,a,i1,50,50\n");
        let source = ScoreSource::open(file.path()).unwrap();
        assert!(matches!(
            source.records(),
            Err(ScoreError::MissingScoreColumn { .. })
        ));
    }

    #[test]
    fn test_empty_file_has_no_score_column() {
        let file = csv_file("");
        let source = ScoreSource::open(file.path()).unwrap();
        assert!(matches!(
            source.records(),
            Err(ScoreError::MissingScoreColumn { .. })
        ));
    }

    #[test]
    fn test_records_restart_from_top() {
        let file = csv_file("sid,item,q1 score\ns1,i1,1\ns2,i2,2\n");
        let source = ScoreSource::open(file.path()).unwrap();

        let first = source.records().unwrap().count();
        let second = source.records().unwrap().count();
        assert_eq!(first, 2);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_ragged_rows_are_allowed() {
        let file = csv_file("sid,item,q1 score\ns1,i1,1\ns2\n");
        let source = ScoreSource::open(file.path()).unwrap();
        let rows: Vec<_> = source.records().unwrap().collect::<Result<_>>().unwrap();
        assert_eq!(rows[1].len(), 1);
    }
}
