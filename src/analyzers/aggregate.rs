use crate::analyzers::types::AverageTable;
use crate::analyzers::utility::{mean, round2};
use crate::scores::ScoreTable;

/// Reduces every group in `table` to its mean score rounded to two decimals.
///
/// Groups come out in the same order as the table. A [`ScoreTable`] never
/// holds a key without scores, so every key gets an entry.
pub fn compute_averages(table: &ScoreTable) -> AverageTable {
    table
        .iter()
        .filter(|(_, scores)| !scores.is_empty())
        .map(|(key, scores)| (key.to_string(), round2(mean(scores))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rounds_to_two_places() {
        let mut table = ScoreTable::new();
        for s in [10, 20, 25] {
            table.push("i1", s);
        }
        let averages = compute_averages(&table);
        assert_eq!(averages.get("i1"), Some(18.33));
    }

    #[test]
    fn test_one_entry_per_key_in_order() {
        let mut table = ScoreTable::new();
        table.push("b", 100);
        table.push("a", 0);
        table.push("b", 50);
        table.push("c", 33);

        let averages = compute_averages(&table);
        let entries: Vec<_> = averages.iter().collect();
        assert_eq!(entries, vec![("b", 75.0), ("a", 0.0), ("c", 33.0)]);
    }

    #[test]
    fn test_empty_table() {
        assert!(compute_averages(&ScoreTable::new()).is_empty());
    }
}
