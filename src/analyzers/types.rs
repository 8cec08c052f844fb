//! Data types produced by the aggregation step.

use serde::{Serialize, Serializer};

/// Rounded mean score per grouping key, in the key order of the source table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AverageTable {
    entries: Vec<(String, f64)>,
}

impl AverageTable {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, avg)| avg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, avg)| (k.as_str(), *avg))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for AverageTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for AverageTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// A bound value and every key that reaches it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremum {
    pub names: Vec<String>,
    pub value: f64,
}

impl Extremum {
    pub(crate) fn starting_at(value: f64) -> Self {
        Self {
            names: Vec::new(),
            value,
        }
    }
}

/// Highest and lowest mean across all groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub highest: Extremum,
    pub lowest: Extremum,
}
