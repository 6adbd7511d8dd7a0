//! Sync pipeline entrypoint used by the CLI.
//!
//! ## `run` — 5-step protocol
//!
//! 1. Back up the current output file. Stop if the backup limit is hit;
//!    at that point neither the output nor the network has been touched.
//! 2. Read titles from the (still intact) output file.
//! 3. Fetch stations, render, and overwrite the output file.
//! 4. Read titles from the freshly written file; a mismatch with the
//!    in-memory document is logged.
//! 5. Diff old against new titles.
//!
//! A fetch failure in step 3 leaves the output file as it was.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use rrsync_core::config::SyncConfig;
use rrsync_renderer::{read_titles, Renderer};
use rrsync_source::{build_document, StationSource};

use crate::backup::{backup_on, BackupOutcome};
use crate::diff::{report, DiffReport};
use crate::SyncError;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    /// Backup step result; never [`BackupOutcome::LimitExceeded`].
    pub backup: BackupOutcome,
    pub output: PathBuf,
    pub track_count: usize,
    pub report: DiffReport,
}

/// Run the pipeline with today's local date.
pub fn run(config: &SyncConfig, source: &dyn StationSource) -> Result<SyncSummary, SyncError> {
    run_on(config, source, Local::now().date_naive())
}

/// Run the pipeline, dating any backup with `date`.
pub fn run_on(
    config: &SyncConfig,
    source: &dyn StationSource,
    date: NaiveDate,
) -> Result<SyncSummary, SyncError> {
    let output = config.output.as_path();

    // Step 1.
    let backup = backup_on(output, date, config.max_backups)?;
    if let BackupOutcome::LimitExceeded { limit } = backup {
        return Err(SyncError::BackupLimitExceeded {
            path: output.to_path_buf(),
            limit,
        });
    }

    // Step 2.
    let old_titles = read_titles(output);

    // Step 3.
    let renderer = Renderer::new()?;
    let document = build_document(source)?;
    renderer.write(&document, output)?;

    // Steps 4-5.
    let new_titles = read_titles(output);
    if new_titles != document.titles() {
        tracing::warn!(
            output = %output.display(),
            read = new_titles.len(),
            rendered = document.titles().len(),
            "written playlist does not read back as rendered"
        );
    }
    let report = report(&old_titles, &new_titles);

    Ok(SyncSummary {
        backup,
        output: output.to_path_buf(),
        track_count: document.len(),
        report,
    })
}
