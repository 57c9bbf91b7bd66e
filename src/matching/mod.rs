// src/matching/mod.rs
pub mod distance;
pub mod scanner;
pub mod weights;

use crate::normalize::normalize_field;
use crate::types::ListingRecord;
use distance::field_distance;
use weights::Weights;

/// Weighted aggregate dissimilarity between two listings, in [0, 1].
///
/// Each field pair is normalized before scoring. Pure function of its
/// inputs: symmetric, and zero for a record compared against itself.
pub fn aggregate_distance(a: &ListingRecord, b: &ListingRecord, weights: &Weights) -> f64 {
    let field = |x: &str, y: &str| field_distance(&normalize_field(x), &normalize_field(y));

    weights.company * field(&a.company, &b.company)
        + weights.title * field(&a.title, &b.title)
        + weights.salary * field(&a.salary, &b.salary)
        + weights.location * field(&a.location, &b.location)
        + weights.jd_excerpt * field(&a.jd_excerpt, &b.jd_excerpt)
}
