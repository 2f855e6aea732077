pub mod enums;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use self::enums::{CervicalMucus, OpkResult};

/// One parsed tracking note. Built once by the assembler, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleDayRecord {
    /// Normalized original text, kept for display.
    pub raw_line: String,
    /// Day number from the note's own marker. Informational only —
    /// sequence position is always input line order.
    pub day_index: Option<u32>,
    /// Basal body temperature reading.
    pub bbt: Option<f64>,
    pub opk_result: Option<OpkResult>,
    pub cervical_mucus: Option<CervicalMucus>,
    /// Matched symptom keywords. Empty set when none matched.
    pub symptoms: BTreeSet<String>,
}

/// Ordered sequence of parsed notes, one per non-blank input line.
///
/// Position in the series is append order of the input lines. The parsed
/// `day_index` may be missing, duplicated, or out of order and is never
/// used to sort, index, or dedup the sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleSeries {
    records: Vec<CycleDayRecord>,
}

impl CycleSeries {
    pub fn new(records: Vec<CycleDayRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CycleDayRecord] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&CycleDayRecord> {
        self.records.get(position)
    }

    /// The BBT column, one optional reading per sequence position.
    pub fn temperatures(&self) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.bbt).collect()
    }
}
