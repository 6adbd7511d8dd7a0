//! Error types for rrsync-sync.

use std::path::PathBuf;

use thiserror::Error;

use rrsync_renderer::RenderError;
use rrsync_source::SourceError;

/// All errors that can arise from a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Every same-day backup name for the output is already taken.
    #[error("backup limit of {limit} copies exceeded for {path}")]
    BackupLimitExceeded { path: PathBuf, limit: usize },

    /// Fetching the stations catalog failed.
    #[error("station source error: {0}")]
    Source(#[from] SourceError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
