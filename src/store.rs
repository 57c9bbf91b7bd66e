// src/store.rs
use crate::types::ListingRecord;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Leading JD characters (not bytes; the JD text is mostly CJK) kept for
/// comparison. Longer excerpts add little signal at 15% weight.
pub const DEFAULT_EXCERPT_CHARS: usize = 200;

/// Top-level layout of the record store file.
#[derive(Debug, Default, Deserialize)]
struct StoreFile {
    #[serde(default)]
    internships: Vec<StoreEntry>,
}

/// One stored listing. Carries more fields than the comparator looks at;
/// the extras ride along for display. Fields are optional because scraped
/// entries routinely have explicit nulls or missing keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreEntry {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub jd_full: Option<String>,
    #[serde(default)]
    pub jd_summary: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub collected_at: Option<String>,
}

impl StoreEntry {
    /// Reduce to the five compared fields, preferring the full JD text over
    /// the summary and truncating it to `excerpt_chars`.
    pub fn to_record(&self, excerpt_chars: usize) -> ListingRecord {
        let jd = match self.jd_full.as_deref() {
            Some(full) if !full.trim().is_empty() => full,
            _ => self.jd_summary.as_deref().unwrap_or(""),
        };

        ListingRecord {
            company: text(&self.company),
            title: text(&self.title),
            salary: text(&self.salary),
            location: text(&self.location),
            jd_excerpt: excerpt(jd, excerpt_chars),
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.as_deref().unwrap_or("").to_string()
}

/// First `n` characters of `text`.
pub fn excerpt(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// Load all stored listings from the YAML record store.
pub fn load_store(path: &Path) -> Result<Vec<StoreEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record store: {}", path.display()))?;
    let entries = parse_store(&raw)
        .with_context(|| format!("Failed to parse record store: {}", path.display()))?;

    debug!("loaded {} stored listings from {}", entries.len(), path.display());
    Ok(entries)
}

fn parse_store(raw: &str) -> Result<Vec<StoreEntry>> {
    let file: StoreFile = serde_yaml::from_str(raw)?;
    Ok(file.internships)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_store_with_sparse_entries() {
        let raw = r#"
internships:
  - company: 字节跳动
    title: AI实习生
    salary: null
    jd_full: 负责模型训练与评估
    status: 待投递
  - title: 后端开发
"#;
        let entries = parse_store(raw).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company.as_deref(), Some("字节跳动"));
        assert!(entries[0].salary.is_none());
        assert!(entries[1].company.is_none());
    }

    #[test]
    fn test_parse_store_without_listing_key() {
        let entries = parse_store("other_key: 1\n").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_to_record_prefers_full_jd() {
        let entry = StoreEntry {
            jd_full: Some("负责模型训练".into()),
            jd_summary: Some("模型实习".into()),
            ..StoreEntry::default()
        };
        assert_eq!(entry.to_record(200).jd_excerpt, "负责模型训练");
    }

    #[test]
    fn test_to_record_falls_back_to_summary() {
        let entry = StoreEntry {
            jd_full: Some("   ".into()),
            jd_summary: Some("模型实习".into()),
            ..StoreEntry::default()
        };
        assert_eq!(entry.to_record(200).jd_excerpt, "模型实习");
    }

    #[test]
    fn test_to_record_defaults_missing_fields_to_empty() {
        let record = StoreEntry::default().to_record(200);
        assert_eq!(record, ListingRecord::default());
    }

    #[test]
    fn test_excerpt_truncates_by_characters() {
        assert_eq!(excerpt("负责模型训练与评估", 4), "负责模型");
        assert_eq!(excerpt("short", 200), "short");
    }
}
