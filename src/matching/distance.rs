// src/matching/distance.rs
use strsim::normalized_levenshtein;

/// Dissimilarity ratio between two normalized strings: 0.0 identical,
/// 1.0 completely dissimilar. Symmetric.
///
/// Two empty fields count as identical so that blank optional fields never
/// inflate the aggregate distance; one empty against one non-empty is a
/// full mismatch.
pub fn field_distance(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    if a.is_empty() || b.is_empty() {
        return 1.0;
    }
    1.0 - normalized_levenshtein(a, b)
}
