//! Aggregate and rolling statistics over the BBT column.

use serde::{Deserialize, Serialize};

/// Default trailing window for the rolling mean.
pub const DEFAULT_ROLLING_WINDOW: usize = 3;

/// Whole-series aggregates over present readings only. All fields are
/// absent when the series has no readings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BbtStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

pub fn bbt_stats(temps: &[Option<f64>]) -> BbtStats {
    let present: Vec<f64> = temps.iter().flatten().copied().collect();
    if present.is_empty() {
        return BbtStats::default();
    }
    let min = present.iter().copied().fold(f64::INFINITY, f64::min);
    let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    BbtStats {
        min: Some(min),
        max: Some(max),
        mean: Some(mean),
    }
}

/// Mean of the present readings in the trailing window ending at each
/// position. A window with no present readings yields None there.
pub fn rolling_mean(temps: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    (0..temps.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let present: Vec<f64> = temps[start..=i].iter().flatten().copied().collect();
            if present.is_empty() {
                None
            } else {
                Some(present.iter().sum::<f64>() / present.len() as f64)
            }
        })
        .collect()
}
