// src/matching/scanner.rs
use super::aggregate_distance;
use super::weights::Weights;
use crate::types::ListingRecord;
use anyhow::Result;
use tracing::debug;

/// Aggregate distance at or below which a stored listing counts as the
/// same one. Tuned by hand against real scrapes, not derived from data.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub weights: Weights,
    pub threshold: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Best-matching stored listing for a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicateMatch {
    /// Position in the stored sequence.
    pub index: usize,
    /// Weighted aggregate distance, 0.0 = identical.
    pub distance: f64,
}

/// Scan the stored listings for the closest match to `candidate`.
///
/// Full linear scan; the store holds hundreds of entries at most. Returns
/// the lowest-index minimum if it clears the threshold (inclusive), `None`
/// otherwise or when the store is empty. Rejects a threshold outside [0, 1]
/// instead of clamping it.
pub fn find_duplicate(
    candidate: &ListingRecord,
    existing: &[ListingRecord],
    config: &ScanConfig,
) -> Result<Option<DuplicateMatch>> {
    if !(0.0..=1.0).contains(&config.threshold) {
        anyhow::bail!(
            "threshold must be within [0, 1], got {}",
            config.threshold
        );
    }

    let mut best: Option<DuplicateMatch> = None;
    for (index, record) in existing.iter().enumerate() {
        let distance = aggregate_distance(candidate, record, &config.weights);
        // Strict < keeps the first occurrence on ties.
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(DuplicateMatch { index, distance });
        }
    }

    match best {
        Some(m) if m.distance <= config.threshold => {
            debug!(
                "duplicate candidate: index={} distance={:.3} threshold={:.3}",
                m.index, m.distance, config.threshold
            );
            Ok(Some(m))
        }
        _ => Ok(None),
    }
}
