//! Note parsing — normalizer, field extractors, record assembly.
//!
//! One raw text line becomes one `CycleDayRecord`. The five field
//! extractors are mutually independent: a malformed field resolves to
//! absent without affecting the others, and a malformed line never
//! affects its neighbours.

pub mod extract;
pub mod normalize;

use crate::models::{CycleDayRecord, CycleSeries};
use crate::vocab::Vocabulary;

use self::extract::{extract_bbt, extract_cm, extract_day_index, extract_opk, extract_symptoms};
use self::normalize::normalize_line;

/// Parse one raw note line. Blank lines produce no record.
pub fn parse_note(raw: &str, vocab: &Vocabulary) -> Option<CycleDayRecord> {
    let normalized = normalize_line(raw);
    if normalized.is_empty() {
        return None;
    }
    let lower = normalized.to_lowercase();
    Some(CycleDayRecord {
        day_index: extract_day_index(&lower),
        bbt: extract_bbt(&lower),
        opk_result: extract_opk(&lower),
        cervical_mucus: extract_cm(&lower, vocab),
        symptoms: extract_symptoms(&lower, vocab),
        raw_line: normalized,
    })
}

/// Assemble the ordered series from raw lines. Position is append order;
/// the parsed day marker never reorders or dedups records.
pub fn parse_lines<I, S>(lines: I, vocab: &Vocabulary) -> CycleSeries
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = lines
        .into_iter()
        .filter_map(|line| parse_note(line.as_ref(), vocab))
        .collect();
    CycleSeries::new(records)
}
