//! # Five Number Summary

use crate::model::Score;

/// Minimum, mean, median, population standard deviation, and maximum.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FiveNumberSummary {
    /// Smallest value.
    pub min: Score,

    /// Arithmetic mean.
    pub mean: Score,

    /// Median; the mean of the two middle values for even counts.
    pub median: Score,

    /// Population (not sample) standard deviation.
    pub stdev: Score,

    /// Largest value.
    pub max: Score,
}

/// Compute the [`FiveNumberSummary`] of `values`.
///
/// ## Returns
/// `None` when `values` is empty.
pub fn five_number_summary(values: &[Score]) -> Option<FiveNumberSummary> {
    let mean = mean(values)?;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<Score>() / n as Score;

    Some(FiveNumberSummary {
        min: sorted[0],
        mean,
        median,
        stdev: variance.sqrt(),
        max: sorted[n - 1],
    })
}

/// Arithmetic mean; `None` when `values` is empty.
pub fn mean(values: &[Score]) -> Option<Score> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<Score>() / values.len() as Score)
}
