// src/types.rs
use serde::{Deserialize, Serialize};

/// A scraped job listing reduced to the fields used for duplicate detection.
///
/// Every field defaults to empty: a listing with missing values is still
/// comparable, the blanks simply score against whatever the stored side has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub jd_excerpt: String,
}
