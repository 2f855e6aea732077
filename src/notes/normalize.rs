//! Line normalization ahead of field extraction.

/// Trim surrounding whitespace and collapse internal runs to single
/// spaces. Case is preserved; extractors lowercase their own copy.
pub fn normalize_line(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
