/// Computes the arithmetic mean of a slice of scores. Returns 0.0 for empty input.
pub fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Rounds to two decimal places using the exact binary value of `x`, so
/// 48.285 (stored as 48.28499...) rounds down to 48.28.
pub fn round2(x: f64) -> f64 {
    format!("{:.2}", x).parse().unwrap_or(x)
}
