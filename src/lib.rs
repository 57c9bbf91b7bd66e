// src/lib.rs
pub mod matching;
pub mod normalize;
pub mod store;
pub mod types;

pub use matching::aggregate_distance;
pub use matching::scanner::{find_duplicate, DuplicateMatch, ScanConfig, DEFAULT_THRESHOLD};
pub use matching::weights::{Weights, DEFAULT_WEIGHTS};
pub use types::ListingRecord;
