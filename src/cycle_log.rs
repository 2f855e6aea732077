//! Monthly cycle-length log summary.
//!
//! A simpler companion input to the daily notes: a `month,length` CSV
//! with a header row, one cycle per month. Summarized into average
//! length, a predicted ovulation day, and variability flags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::source::{read_lines, SourceError};

/// Ovulation typically precedes the next period by the luteal phase.
pub const LUTEAL_PHASE_DAYS: f64 = 14.0;

/// Typical cycle-length range in days.
pub const TYPICAL_RANGE_DAYS: (f64, f64) = (21.0, 35.0);

/// Cycle-to-cycle spread at which ovulation timing is unpredictable.
pub const HIGH_VARIABILITY_DAYS: f64 = 10.0;

/// One month's recorded cycle length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleLengthEntry {
    pub month: String,
    pub length_days: f64,
}

/// Parse `month,length` rows. The header row, blank rows, and rows that
/// don't parse are skipped — same fault isolation as note parsing.
pub fn parse_cycle_log(lines: &[String]) -> Vec<CycleLengthEntry> {
    lines
        .iter()
        .skip(1) // header
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let (month, length) = line.split_once(',')?;
            let length_days: f64 = length.trim().parse().ok()?;
            Some(CycleLengthEntry {
                month: month.trim().to_string(),
                length_days,
            })
        })
        .collect()
}

/// Whole-log summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleLengthSummary {
    pub months: usize,
    pub average_days: f64,
    /// Estimated ovulation day within an average cycle.
    pub predicted_ovulation_day: f64,
    pub shortest: CycleLengthEntry,
    pub longest: CycleLengthEntry,
    /// Longest minus shortest.
    pub variability_days: f64,
    /// Average falls outside the typical 21–35 day range.
    pub outside_typical_range: bool,
    /// Spread of `HIGH_VARIABILITY_DAYS` or more.
    pub high_variability: bool,
}

/// Summarize a parsed log. `None` when the log has no usable rows.
pub fn summarize_cycle_log(entries: &[CycleLengthEntry]) -> Option<CycleLengthSummary> {
    if entries.is_empty() {
        return None;
    }
    let total: f64 = entries.iter().map(|e| e.length_days).sum();
    let average_days = total / entries.len() as f64;
    let shortest = entries
        .iter()
        .min_by(|a, b| a.length_days.total_cmp(&b.length_days))?
        .clone();
    let longest = entries
        .iter()
        .max_by(|a, b| a.length_days.total_cmp(&b.length_days))?
        .clone();
    let variability_days = longest.length_days - shortest.length_days;
    let (low, high) = TYPICAL_RANGE_DAYS;

    Some(CycleLengthSummary {
        months: entries.len(),
        average_days,
        predicted_ovulation_day: average_days - LUTEAL_PHASE_DAYS,
        outside_typical_range: average_days < low || average_days > high,
        high_variability: variability_days >= HIGH_VARIABILITY_DAYS,
        shortest,
        longest,
        variability_days,
    })
}

/// Read and summarize a cycle-length log file. The missing-file
/// condition surfaces unchanged; an empty or unusable log is `None`.
pub fn import_cycle_log(path: &Path) -> Result<Option<CycleLengthSummary>, SourceError> {
    let lines = read_lines(path)?;
    let entries = parse_cycle_log(&lines);
    if entries.is_empty() {
        tracing::warn!(file = %path.display(), "Cycle log has no usable rows");
    }
    Ok(summarize_cycle_log(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn parse_skips_header_blank_and_malformed_rows() {
        let entries = parse_cycle_log(&lines(&[
            "month,length",
            "January,28",
            "",
            "February",
            "March,notanumber",
            "April,31.5",
        ]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].month, "January");
        assert!((entries[1].length_days - 31.5).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_numbers() {
        let entries = parse_cycle_log(&lines(&[
            "month,length",
            "January,28",
            "February,30",
            "March,26",
        ]));
        let summary = summarize_cycle_log(&entries).unwrap();
        assert_eq!(summary.months, 3);
        assert!((summary.average_days - 28.0).abs() < 1e-9);
        assert!((summary.predicted_ovulation_day - 14.0).abs() < 1e-9);
        assert_eq!(summary.shortest.month, "March");
        assert_eq!(summary.longest.month, "February");
        assert!((summary.variability_days - 4.0).abs() < 1e-9);
        assert!(!summary.outside_typical_range);
        assert!(!summary.high_variability);
    }

    #[test]
    fn flags_irregular_average_and_high_variability() {
        let entries = parse_cycle_log(&lines(&[
            "month,length",
            "January,45",
            "February,33",
        ]));
        let summary = summarize_cycle_log(&entries).unwrap();
        assert!(summary.outside_typical_range);
        assert!(summary.high_variability);
    }

    #[test]
    fn empty_log_is_none() {
        assert!(summarize_cycle_log(&[]).is_none());
        let header_only = parse_cycle_log(&lines(&["month,length"]));
        assert!(summarize_cycle_log(&header_only).is_none());
    }

    #[test]
    fn import_missing_file_surfaces_source_error() {
        let result = import_cycle_log(Path::new("/nonexistent/cycle_log.csv"));
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }
}
