//! Percentile routines over metric columns.
//!
//! Both routines ignore NaN and infinite entries, so a column with gaps or
//! unusable cells behaves as if those rows were absent.

/// Sorted copy of the finite entries of `values`.
fn sorted_finite(values: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// The `p`-th percentile of `values` using linear interpolation between the
/// two bracketing order statistics (fractional index `p/100 * (n-1)`).
/// `p` is clamped to 0–100. Returns `None` for an empty column.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    let sorted = sorted_finite(values);
    if sorted.is_empty() {
        return None;
    }
    let p = p.clamp(0.0, 100.0);
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Percentile rank (0–100) of `score` within `values`.
///
/// Counts values strictly below and at-or-below `score`; with no ties this is
/// the percentage of values at or below `score`, and a run of tied values
/// gets the mean of their ranks. Returns `None` for an empty column.
pub fn percentile_of_score(values: &[f64], score: f64) -> Option<f64> {
    let sorted = sorted_finite(values);
    if sorted.is_empty() {
        return None;
    }
    let left = sorted.iter().take_while(|v| **v < score).count();
    let right = sorted.iter().take_while(|v| **v <= score).count();
    let bump = usize::from(right > left);
    Some((left + right + bump) as f64 * 50.0 / sorted.len() as f64)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
