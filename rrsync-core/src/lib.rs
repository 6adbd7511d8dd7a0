//! rrsync core library — playlist document model, station records, run config.
//!
//! Public API surface:
//! - [`types`] — [`Document`], [`Track`], [`Station`], [`Genre`]
//! - [`config`] — [`SyncConfig`]

pub mod config;
pub mod types;

pub use config::SyncConfig;
pub use types::{Document, Genre, Station, Track, TrackFields};
