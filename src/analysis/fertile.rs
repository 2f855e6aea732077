//! Fertile-window detection over already-extracted signals.

use serde::{Deserialize, Serialize};

use crate::models::enums::OpkResult;
use crate::models::CycleSeries;

/// A flagged position and which signal(s) fired there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertileFlag {
    pub position: usize,
    /// Day marker from the note, when one was parsed.
    pub day_index: Option<u32>,
    pub opk_positive: bool,
    pub fertile_mucus: bool,
}

/// Per-position predicate: OPK positive OR fertile-type mucus
/// (eggwhite, slippery, watery). No temporal windowing — membership is
/// independent of neighbouring days.
pub fn fertile_flags(series: &CycleSeries) -> Vec<FertileFlag> {
    series
        .records()
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let opk_positive = record.opk_result == Some(OpkResult::Positive);
            let fertile_mucus = record.cervical_mucus.is_some_and(|cm| cm.is_fertile());
            (opk_positive || fertile_mucus).then(|| FertileFlag {
                position,
                day_index: record.day_index,
                opk_positive,
                fertile_mucus,
            })
        })
        .collect()
}

/// Flagged sequence positions, in series order.
pub fn fertile_indices(series: &CycleSeries) -> Vec<usize> {
    fertile_flags(series).iter().map(|flag| flag.position).collect()
}
