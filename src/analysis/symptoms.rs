//! Symptom frequency counting and ranking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::CycleSeries;
use crate::vocab::Vocabulary;

/// Note-level keyword counts plus a deterministic ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomFrequencyTable {
    /// keyword → number of notes mentioning it. Only observed keywords
    /// appear.
    pub counts: BTreeMap<String, usize>,
    /// (count, keyword) pairs, count descending; ties break on
    /// ascending keyword so ranking is reproducible across runs.
    pub ranking: Vec<(usize, String)>,
}

impl SymptomFrequencyTable {
    /// The most frequently mentioned symptom, if any were seen.
    pub fn top(&self) -> Option<&(usize, String)> {
        self.ranking.first()
    }
}

/// Count note-level presence of each vocabulary keyword across the whole
/// series. A keyword appearing twice in one note still counts once.
pub fn symptom_frequency(series: &CycleSeries, vocab: &Vocabulary) -> SymptomFrequencyTable {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in series.records() {
        let line = record.raw_line.to_lowercase();
        for keyword in &vocab.symptom_keywords {
            if line.contains(keyword.as_str()) {
                *counts.entry(keyword.clone()).or_insert(0) += 1;
            }
        }
    }

    let mut ranking: Vec<(usize, String)> = counts
        .iter()
        .map(|(keyword, &count)| (count, keyword.clone()))
        .collect();
    ranking.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    SymptomFrequencyTable { counts, ranking }
}
