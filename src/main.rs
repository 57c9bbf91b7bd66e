// src/main.rs
use anyhow::Result;
use clap::Parser;
use listing_dedup::{find_duplicate, store, ListingRecord, ScanConfig, DEFAULT_THRESHOLD};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Fuzzy duplicate lookup against the scraped listing store.
///
/// Exit codes: 0 = duplicate found, 1 = no duplicate, 2 = store unreadable
/// or invalid arguments.
#[derive(Parser)]
#[command(name = "dedup-check")]
#[command(about = "Check a scraped job listing against the YAML store for duplicates")]
struct Cli {
    /// Company name of the candidate listing
    #[arg(long, default_value = "")]
    company: String,

    /// Job title of the candidate listing
    #[arg(long, default_value = "")]
    title: String,

    /// Salary string, platform formatting as-is
    #[arg(long, default_value = "")]
    salary: String,

    /// Work location of the candidate listing
    #[arg(long, default_value = "")]
    location: String,

    /// JD text (full or summary)
    #[arg(long, default_value = "")]
    jd: String,

    /// Aggregate distance at or below which an entry counts as a duplicate
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Leading JD characters used for comparison
    #[arg(long, default_value_t = store::DEFAULT_EXCERPT_CHARS)]
    jd_chars: usize,

    /// Path to the YAML record store
    #[arg(long, default_value = "internships.yaml")]
    yaml: PathBuf,

    /// Print the result as JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let entries = store::load_store(&cli.yaml)?;

    let candidate = ListingRecord {
        company: cli.company.clone(),
        title: cli.title.clone(),
        salary: cli.salary.clone(),
        location: cli.location.clone(),
        jd_excerpt: store::excerpt(&cli.jd, cli.jd_chars),
    };
    let records: Vec<ListingRecord> = entries
        .iter()
        .map(|e| e.to_record(cli.jd_chars))
        .collect();

    let config = ScanConfig {
        threshold: cli.threshold,
        ..ScanConfig::default()
    };

    match find_duplicate(&candidate, &records, &config)? {
        Some(m) => {
            let entry = &entries[m.index];
            if cli.json {
                let out = json!({
                    "duplicate": true,
                    "index": m.index,
                    "distance": m.distance,
                    "company": entry.company.as_deref().unwrap_or(""),
                    "title": entry.title.as_deref().unwrap_or(""),
                });
                println!("{}", serde_json::to_string(&out)?);
            } else {
                println!("duplicate found: index={} distance={:.3}", m.index, m.distance);
                println!(
                    "  company: {}  title: {}",
                    entry.company.as_deref().unwrap_or(""),
                    entry.title.as_deref().unwrap_or("")
                );
                println!(
                    "  salary: {}  location: {}",
                    entry.salary.as_deref().unwrap_or(""),
                    entry.location.as_deref().unwrap_or("")
                );
                println!(
                    "  status: {}  collected_at: {}",
                    entry.status.as_deref().unwrap_or(""),
                    entry.collected_at.as_deref().unwrap_or("")
                );
            }
            Ok(true)
        }
        None => {
            if cli.json {
                println!("{}", serde_json::to_string(&json!({ "duplicate": false }))?);
            } else if entries.is_empty() {
                println!("record store is empty, nothing to compare");
            } else {
                println!("no duplicate found");
            }
            Ok(false)
        }
    }
}
