//! Tolerant field extractors.
//!
//! Each extractor takes the lowercase normalized line and returns an
//! optional value. Unparsable input resolves to absent, never an error,
//! and no field depends on another field having parsed.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::enums::{CervicalMucus, OpkResult};
use crate::vocab::Vocabulary;

// ── Day index ──────────────────────────────────────────────────────────────

/// Leading day marker: "d14" or the word "day" followed by a numeric
/// token ("day 14", "day 14:"). The digit run is the value.
pub fn extract_day_index(line: &str) -> Option<u32> {
    if let Some(rest) = line.strip_prefix('d') {
        let digits = leading_digits(rest);
        if !digits.is_empty() {
            return digits.parse().ok();
        }
    }
    let mut tokens = line.split_whitespace();
    if tokens.next() == Some("day") {
        if let Some(token) = tokens.next() {
            let digits = leading_digits(token);
            if !digits.is_empty() {
                return digits.parse().ok();
            }
        }
    }
    None
}

fn leading_digits(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

// ── Temperature ────────────────────────────────────────────────────────────

static BBT_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"bbt\s*[:=]?\s*([0-9]+(?:\.[0-9]+)?)").unwrap());

/// First bbt-labeled numeric token anywhere in the line. Accepts integer
/// and decimal forms and is robust to trailing punctuation ("bbt 36.70,").
pub fn extract_bbt(line: &str) -> Option<f64> {
    BBT_VALUE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|value| value.as_str().parse().ok())
}

// ── Ovulation kit result ───────────────────────────────────────────────────

/// Kit marker plus a qualifier word anywhere in the line ("pos",
/// "positive", "neg", "negative"; a positive qualifier wins). A marker
/// with no qualifier collapses into absent, same as no marker at all.
pub fn extract_opk(line: &str) -> Option<OpkResult> {
    if !line.contains("opk") {
        return None;
    }
    let mut saw_negative = false;
    for token in line.split_whitespace() {
        let token = token.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        if token.starts_with("pos") {
            return Some(OpkResult::Positive);
        }
        if token.starts_with("neg") {
            saw_negative = true;
        }
    }
    if saw_negative {
        Some(OpkResult::Negative)
    } else {
        None
    }
}

// ── Cervical mucus ─────────────────────────────────────────────────────────

/// Labeled field first ("cm: eggwhite" / "cm watery" up to the next
/// separator), falling back to a whole-line scan in vocabulary priority
/// order when the label is missing or its field matches nothing.
pub fn extract_cm(line: &str, vocab: &Vocabulary) -> Option<CervicalMucus> {
    for label in ["cm:", "cm "] {
        if let Some((_, after)) = line.split_once(label) {
            let field = after.split([';', ',']).next().unwrap_or("").trim();
            if let Some(found) = scan_mucus(field, vocab) {
                return Some(found);
            }
        }
    }
    scan_mucus(line, vocab)
}

fn scan_mucus(text: &str, vocab: &Vocabulary) -> Option<CervicalMucus> {
    vocab
        .mucus_priority
        .iter()
        .find(|(keyword, _)| text.contains(keyword.as_str()))
        .map(|(_, value)| *value)
}

// ── Symptoms ───────────────────────────────────────────────────────────────

/// Substring containment scan over the whole line. Repeats within one
/// line collapse via the set.
pub fn extract_symptoms(line: &str, vocab: &Vocabulary) -> BTreeSet<String> {
    vocab
        .symptom_keywords
        .iter()
        .filter(|keyword| line.contains(keyword.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =================================================================
    // DAY INDEX
    // =================================================================

    #[test]
    fn day_index_short_form() {
        assert_eq!(extract_day_index("d14: opk pos"), Some(14));
        assert_eq!(extract_day_index("d16: bbt 36.60"), Some(16));
    }

    #[test]
    fn day_index_word_form() {
        assert_eq!(extract_day_index("day 14: bbt 36.70"), Some(14));
        assert_eq!(extract_day_index("day 15 opk negative"), Some(15));
    }

    #[test]
    fn day_index_absent() {
        assert_eq!(extract_day_index("bbt 36.45; cm watery"), None);
        assert_eq!(extract_day_index("dry today"), None);
        assert_eq!(extract_day_index("day soon"), None);
    }

    // =================================================================
    // TEMPERATURE
    // =================================================================

    #[test]
    fn bbt_with_space() {
        assert_eq!(extract_bbt("bbt 36.45"), Some(36.45));
    }

    #[test]
    fn bbt_with_colon_no_space() {
        assert_eq!(extract_bbt("day 15; bbt:36.25; cm creamy"), Some(36.25));
    }

    #[test]
    fn bbt_trailing_punctuation() {
        assert_eq!(extract_bbt("bbt 36.70, opk positive"), Some(36.70));
    }

    #[test]
    fn bbt_integer_form() {
        assert_eq!(extract_bbt("bbt 36"), Some(36.0));
    }

    #[test]
    fn bbt_first_labeled_occurrence_wins() {
        assert_eq!(extract_bbt("bbt 36.45 then later bbt 36.80"), Some(36.45));
    }

    #[test]
    fn bbt_absent_without_marker() {
        assert_eq!(extract_bbt("temp was 36.45 this morning"), None);
        assert_eq!(extract_bbt("bbt pending"), None);
    }

    // =================================================================
    // OPK
    // =================================================================

    #[test]
    fn opk_positive_variants() {
        assert_eq!(extract_opk("opk positive"), Some(OpkResult::Positive));
        assert_eq!(extract_opk("opk pos @ 5:45am"), Some(OpkResult::Positive));
    }

    #[test]
    fn opk_negative_variants() {
        assert_eq!(extract_opk("opk negative"), Some(OpkResult::Negative));
        assert_eq!(extract_opk("opk neg today"), Some(OpkResult::Negative));
    }

    #[test]
    fn opk_positive_wins_when_both_qualifiers_appear() {
        assert_eq!(
            extract_opk("opk positive after yesterday's negative"),
            Some(OpkResult::Positive)
        );
    }

    #[test]
    fn opk_marker_without_qualifier_is_absent() {
        assert_eq!(extract_opk("opk taken at 7am"), None);
    }

    #[test]
    fn opk_qualifier_without_marker_is_absent() {
        assert_eq!(extract_opk("feeling positive today"), None);
    }

    // =================================================================
    // CERVICAL MUCUS
    // =================================================================

    #[test]
    fn cm_labeled_colon_form() {
        let vocab = Vocabulary::default();
        assert_eq!(
            extract_cm("cm: eggwhite; cramps", &vocab),
            Some(CervicalMucus::Eggwhite)
        );
    }

    #[test]
    fn cm_labeled_space_form() {
        let vocab = Vocabulary::default();
        assert_eq!(
            extract_cm("day 18 cm dry; headache", &vocab),
            Some(CervicalMucus::Dry)
        );
    }

    #[test]
    fn cm_labeled_field_wins_over_later_keyword() {
        let vocab = Vocabulary::default();
        // The labeled field says creamy; "eggwhite" outside the field
        // must not override it.
        assert_eq!(
            extract_cm("cm: creamy; looked almost eggwhite", &vocab),
            Some(CervicalMucus::Creamy)
        );
    }

    #[test]
    fn cm_unlabeled_keyword_scan() {
        let vocab = Vocabulary::default();
        assert_eq!(
            extract_cm("noticed watery discharge", &vocab),
            Some(CervicalMucus::Watery)
        );
    }

    #[test]
    fn cm_priority_order_on_multiple_keywords() {
        let vocab = Vocabulary::default();
        assert_eq!(
            extract_cm("watery turning eggwhite", &vocab),
            Some(CervicalMucus::Eggwhite)
        );
    }

    #[test]
    fn cm_unknown_descriptor_falls_back_then_absent() {
        let vocab = Vocabulary::default();
        assert_eq!(extract_cm("cm: abundant", &vocab), None);
    }

    #[test]
    fn cm_absent() {
        let vocab = Vocabulary::default();
        assert_eq!(extract_cm("bbt 36.45; cramps", &vocab), None);
    }

    // =================================================================
    // SYMPTOMS
    // =================================================================

    #[test]
    fn symptoms_substring_match() {
        let vocab = Vocabulary::default();
        let found = extract_symptoms("cramps mild, slight bloating", &vocab);
        assert!(found.contains("cramp"));
        assert!(found.contains("bloat"));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn symptoms_duplicates_collapse() {
        let vocab = Vocabulary::default();
        let found = extract_symptoms("cramps in the morning, cramps at night", &vocab);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn symptoms_empty_set_when_none_match() {
        let vocab = Vocabulary::default();
        assert!(extract_symptoms("bbt 36.45; cm watery", &vocab).is_empty());
    }

    #[test]
    fn symptoms_substituted_vocabulary() {
        let vocab = Vocabulary {
            symptom_keywords: vec!["dizzy".to_string()],
            ..Vocabulary::default()
        };
        let found = extract_symptoms("felt dizzy, cramps too", &vocab);
        assert!(found.contains("dizzy"));
        assert_eq!(found.len(), 1);
    }
}
