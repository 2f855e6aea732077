//! Sustained thermal-shift ovulation detection.
//!
//! A first-qualifying-window linear scan, not a peak-finding or
//! changepoint method: deterministic and auditable over self-tracked
//! data with gaps. The detection is retrospective.

use serde::{Deserialize, Serialize};

/// Detection parameters. `rise` is in the same unit as the temperature
/// column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermalShiftParams {
    /// Days of prior history the baseline is averaged over.
    pub lookback: usize,
    /// Required elevation above baseline.
    pub rise: f64,
    /// Consecutive days the elevation must hold.
    pub sustain: usize,
}

impl Default for ThermalShiftParams {
    fn default() -> Self {
        Self {
            lookback: 6,
            rise: 0.25,
            sustain: 3,
        }
    }
}

/// A detected shift: the sequence position where the rise becomes
/// established, and the baseline it was judged against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermalShift {
    pub position: usize,
    pub baseline: f64,
}

/// Scan left to right for the first position where every one of
/// `sustain` consecutive readings is present and at least
/// `baseline + rise` above the prior-window mean.
///
/// Candidates with fewer than `max(3, lookback / 2)` present readings in
/// their lookback window are skipped, not failed. First match wins; the
/// scan never backtracks. No qualifying position is a valid outcome,
/// not an error.
pub fn detect_thermal_shift(
    temps: &[Option<f64>],
    params: &ThermalShiftParams,
) -> Option<ThermalShift> {
    let n = temps.len();
    if n < params.lookback + params.sustain {
        return None;
    }
    for i in params.lookback..=n - params.sustain {
        let prior: Vec<f64> = temps[i - params.lookback..i].iter().flatten().copied().collect();
        if prior.len() < required_history(params.lookback) {
            // insufficient history — candidate is ineligible, move on
            continue;
        }
        let baseline = prior.iter().sum::<f64>() / prior.len() as f64;
        let sustained = temps[i..i + params.sustain]
            .iter()
            .all(|t| t.is_some_and(|v| v >= baseline + params.rise));
        if sustained {
            return Some(ThermalShift { position: i, baseline });
        }
    }
    None
}

/// Minimum present readings required in the lookback window.
fn required_history(lookback: usize) -> usize {
    (lookback / 2).max(3)
}
