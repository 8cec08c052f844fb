use crate::analyzers::types::{AverageTable, Extremes, Extremum};
use crate::error::{Result, ScoreError};

/// Starting bound for the highest mean.
const HIGHEST_FLOOR: f64 = 0.0;
/// Starting bound for the lowest mean.
const LOWEST_CEILING: f64 = 100.0;

/// Finds the key(s) with the highest and lowest mean.
///
/// Keys are scanned in table order; a key equal to the current bound is
/// appended, a key beyond it replaces the list. The highest and lowest checks
/// run independently, so a single group lands in both.
///
/// # Errors
///
/// Returns [`ScoreError::NoAverages`] if `averages` is empty.
pub fn compute_extremes(averages: &AverageTable) -> Result<Extremes> {
    if averages.is_empty() {
        return Err(ScoreError::NoAverages);
    }

    let mut highest = Extremum::starting_at(HIGHEST_FLOOR);
    let mut lowest = Extremum::starting_at(LOWEST_CEILING);

    for (key, avg) in averages.iter() {
        if avg > highest.value {
            highest.value = avg;
            highest.names = vec![key.to_string()];
        } else if avg == highest.value {
            highest.names.push(key.to_string());
        }

        if avg < lowest.value {
            lowest.value = avg;
            lowest.names = vec![key.to_string()];
        } else if avg == lowest.value {
            lowest.names.push(key.to_string());
        }
    }

    Ok(Extremes { highest, lowest })
}
