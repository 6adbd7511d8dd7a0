//! Dated, collision-free backups of the previous playlist.
//!
//! For `dir/out.xspf` on 2024-03-07 the candidates are, in order:
//!   dir/out_20240307.xspf.bak
//!   dir/out_20240307(1).xspf.bak
//!   …
//!   dir/out_20240307(99).xspf.bak
//!
//! The first free name receives a byte copy of the file. Existing backups
//! are never overwritten; when all candidates are taken nothing is copied.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rrsync_core::config::SyncConfig;

use crate::error::{io_err, SyncError};

/// What [`backup`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// No file at the output path; nothing to preserve.
    Skipped,
    /// A copy was written to `path`.
    Created { path: PathBuf },
    /// Every candidate name already exists; nothing was copied.
    LimitExceeded { limit: usize },
}

/// Back up `config.output` using today's local date and `config.max_backups`.
pub fn backup(config: &SyncConfig) -> Result<BackupOutcome, SyncError> {
    backup_on(&config.output, Local::now().date_naive(), config.max_backups)
}

/// Back up `path` under a name dated `date`, trying at most `limit` names.
///
/// # Errors
/// Returns [`SyncError::Io`] only on unexpected filesystem failures; a
/// missing source file is [`BackupOutcome::Skipped`].
pub fn backup_on(path: &Path, date: NaiveDate, limit: usize) -> Result<BackupOutcome, SyncError> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no previous playlist, backup skipped");
            return Ok(BackupOutcome::Skipped);
        }
        Err(err) => return Err(io_err(path, err)),
    };

    for index in 0..limit {
        let candidate = backup_path(path, date, index);
        match create_new(&candidate, &content) {
            Ok(()) => {
                tracing::info!(
                    path = %path.display(),
                    backup = %candidate.display(),
                    "previous playlist backed up"
                );
                return Ok(BackupOutcome::Created { path: candidate });
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!(candidate = %candidate.display(), "backup name taken");
            }
            Err(err) => return Err(io_err(&candidate, err)),
        }
    }

    tracing::warn!(path = %path.display(), limit, "backup limit exceeded");
    Ok(BackupOutcome::LimitExceeded { limit })
}

/// Build the `index`-th backup name for `path` on `date`.
///
/// Index 0 is `{stem}_{YYYYMMDD}{ext}.bak`; index n is
/// `{stem}_{YYYYMMDD}({n}){ext}.bak`.
pub fn backup_path(path: &Path, date: NaiveDate, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let date = date.format("%Y%m%d");
    let name = if index == 0 {
        format!("{stem}_{date}{ext}.bak")
    } else {
        format!("{stem}_{date}({index}){ext}.bak")
    };
    path.with_file_name(name)
}

fn create_new(path: &Path, content: &[u8]) -> io::Result<()> {
    create_new_with(path, |file| {
        file.write_all(content)?;
        file.sync_all()
    })
}

/// Create `path` exclusively and fill it; a half-written file is removed so
/// its name stays free for the next run.
fn create_new_with(
    path: &Path,
    fill: impl FnOnce(&mut fs::File) -> io::Result<()>,
) -> io::Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    if let Err(err) = fill(&mut file) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(err);
    }
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
