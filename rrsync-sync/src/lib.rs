//! # rrsync-sync
//!
//! Backup rotation, title diffing and the sync pipeline.
//!
//! Call [`pipeline::run`] to back up the current playlist, fetch and render a
//! fresh one, and get back a [`SyncSummary`] describing what changed.

pub mod backup;
pub mod diff;
pub mod error;
pub mod pipeline;

pub use backup::{backup, BackupOutcome};
pub use diff::{compare, report, DiffReport, ReportLine, TitleDiff};
pub use error::SyncError;
pub use pipeline::SyncSummary;
