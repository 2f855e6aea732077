//! Analysis components — independent, stateless passes over the
//! assembled series. Each component only reads the immutable
//! `CycleSeries`; none feeds back into it.

pub mod fertile;
pub mod ovulation;
pub mod stats;
pub mod symptoms;

use serde::{Deserialize, Serialize};

use crate::models::CycleSeries;
use crate::vocab::Vocabulary;

use self::fertile::FertileFlag;
use self::ovulation::{ThermalShift, ThermalShiftParams};
use self::stats::{BbtStats, DEFAULT_ROLLING_WINDOW};
use self::symptoms::SymptomFrequencyTable;

/// Complete analysis payload — a single response for display consumers.
/// Plain structured data; formatting belongs downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleReport {
    pub records: usize,
    pub bbt: BbtStats,
    pub rolling_bbt: Vec<Option<f64>>,
    pub fertile_days: Vec<FertileFlag>,
    pub ovulation: Option<ThermalShift>,
    pub symptoms: SymptomFrequencyTable,
}

/// Run every analysis component over the series.
pub fn analyze(
    series: &CycleSeries,
    params: &ThermalShiftParams,
    vocab: &Vocabulary,
) -> CycleReport {
    let temps = series.temperatures();
    CycleReport {
        records: series.len(),
        bbt: stats::bbt_stats(&temps),
        rolling_bbt: stats::rolling_mean(&temps, DEFAULT_ROLLING_WINDOW),
        fertile_days: fertile::fertile_flags(series),
        ovulation: ovulation::detect_thermal_shift(&temps, params),
        symptoms: symptoms::symptom_frequency(series, vocab),
    }
}
