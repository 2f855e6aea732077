//! Keyword vocabularies for note parsing.
//!
//! The note grammar is a small fixed vocabulary, not natural language.
//! Vocabularies are explicit values handed to the extractors and the
//! ranker so callers (and tests) can substitute their own.

use crate::models::enums::CervicalMucus;

/// Mucus descriptors in matching priority order. First match wins when a
/// note mentions several.
pub const MUCUS_PRIORITY: &[(&str, CervicalMucus)] = &[
    ("eggwhite", CervicalMucus::Eggwhite),
    ("slippery", CervicalMucus::Slippery),
    ("watery", CervicalMucus::Watery),
    ("creamy", CervicalMucus::Creamy),
    ("sticky", CervicalMucus::Sticky),
    ("dry", CervicalMucus::Dry),
];

/// Symptom keywords collected per record and counted by the ranker.
/// Matching is substring containment, so "cramps" still hits "cramp".
pub const SYMPTOM_KEYWORDS: &[&str] = &[
    "cramp", "spotting", "breast", "nausea", "bloat",
    "headache", "mood", "tender", "fatigue",
];

/// Substitutable vocabulary bundle.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub mucus_priority: Vec<(String, CervicalMucus)>,
    pub symptom_keywords: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            mucus_priority: MUCUS_PRIORITY
                .iter()
                .map(|(keyword, value)| (keyword.to_string(), *value))
                .collect(),
            symptom_keywords: SYMPTOM_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}
