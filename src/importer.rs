use crate::config::Config;
use crate::entry::LexicalEntry;
use crate::error::{ImportError, Result};
use crate::normalize;
use crate::storage::{EntryStore, ImportRun};
use chrono::Utc;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// Counters for one complete run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows written to the entries table.
    pub imported: u64,
    /// Lines that were not valid JSON.
    pub bad_lines: u64,
    /// Decoded records lacking a usable word or pos.
    pub rejected: u64,
    /// Entries whose database write failed.
    pub failed: u64,
}

/// Stream the dump file into the database: one JSON object per line in,
/// one entries row per accepted record out, flushed in batches.
pub fn run_import(dump_path: &Path, db_path: &Path, config: &Config) -> Result<ImportSummary> {
    if !dump_path.exists() {
        return Err(ImportError::MissingInput(dump_path.to_path_buf()));
    }

    let started_at = Utc::now();
    let mut store = EntryStore::open(db_path)?;
    let reader = BufReader::new(File::open(dump_path)?);

    let batch_size = config.batch_size.max(1);
    let mut batch: Vec<LexicalEntry> = Vec::with_capacity(batch_size);
    let mut summary = ImportSummary::default();

    info!(
        "starting import of {} into {}",
        dump_path.display(),
        db_path.display()
    );

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: Value = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping line {}: invalid JSON: {}", line_no + 1, e);
                summary.bad_lines += 1;
                continue;
            }
        };

        match normalize::normalize(&record) {
            Some(entry) => {
                batch.push(entry);
                if batch.len() >= batch_size {
                    flush(&mut store, &mut batch, &mut summary)?;
                }
            }
            // Missing word or pos: not an entry we keep, and not worth a log line
            None => summary.rejected += 1,
        }
    }

    flush(&mut store, &mut batch, &mut summary)?;

    store.record_run(&ImportRun {
        id: Uuid::new_v4(),
        started_at,
        finished_at: Utc::now(),
        imported: summary.imported,
        skipped: summary.bad_lines + summary.rejected,
        failed: summary.failed,
    })?;

    info!(
        "import finished: {} imported, {} bad lines, {} rejected, {} failed writes",
        summary.imported, summary.bad_lines, summary.rejected, summary.failed
    );
    Ok(summary)
}

fn flush(
    store: &mut EntryStore,
    batch: &mut Vec<LexicalEntry>,
    summary: &mut ImportSummary,
) -> Result<()> {
    if batch.is_empty() {
        return Ok(());
    }
    let outcome = store.insert_batch(batch)?;
    summary.imported += outcome.written;
    summary.failed += outcome.failed;
    batch.clear();
    info!("processed {} entries so far", summary.imported);
    Ok(())
}
