//! JSON-lines feed runner
//!
//! Reads one product record per line, writes one scored product per line.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::product::ScoredProduct;
use crate::build_info::BuildInfo;
use super::record::OffProduct;
use super::FeedResult;

/// Malformed lines reported individually before going quiet
const MAX_LOGGED_ERRORS: u64 = 5;
const PROGRESS_INTERVAL: u64 = 100;

/// Outcome of one feed run
#[derive(Debug, Clone, Serialize)]
pub struct FeedSummary {
    pub scored: u64,
    pub skipped: u64,
    pub errors: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub build: BuildInfo,
}

/// Parse and score a single feed line
///
/// `Ok(None)` means the record parsed but lacks a barcode or a name.
pub fn score_line(line: &str) -> FeedResult<Option<ScoredProduct>> {
    score_raw_line(line.as_bytes())
}

/// Like [`score_line`], for undecoded bytes; invalid UTF-8 is a JSON error
fn score_raw_line(line: &[u8]) -> FeedResult<Option<ScoredProduct>> {
    let record: OffProduct = serde_json::from_slice(line)?;
    Ok(ScoredProduct::from_off(record))
}

/// Score every record of a JSON-lines feed
///
/// Malformed lines, including ones that are not valid UTF-8, are counted and
/// skipped; read and write failures abort.
pub fn score_feed<R: BufRead, W: Write>(reader: R, mut writer: W) -> FeedResult<FeedSummary> {
    let started_at = Utc::now();
    let mut scored = 0u64;
    let mut skipped = 0u64;
    let mut errors = 0u64;

    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match score_raw_line(&line) {
            Ok(Some(product)) => {
                serde_json::to_writer(&mut writer, &product)?;
                writer.write_all(b"\n")?;
                scored += 1;

                if scored % PROGRESS_INTERVAL == 0 {
                    tracing::info!("Scored {} products...", scored);
                }
            }
            Ok(None) => {
                skipped += 1;
                tracing::debug!(line = index + 1, "Skipping record without barcode or name");
            }
            Err(e) => {
                errors += 1;
                if errors <= MAX_LOGGED_ERRORS {
                    tracing::warn!(line = index + 1, "Malformed feed record: {}", e);
                }
            }
        }
    }

    writer.flush()?;

    let summary = FeedSummary {
        scored,
        skipped,
        errors,
        started_at,
        finished_at: Utc::now(),
        build: BuildInfo::current(),
    };

    tracing::info!(
        "Feed done. Scored: {}, skipped: {}, errors: {}",
        summary.scored,
        summary.skipped,
        summary.errors
    );

    Ok(summary)
}
