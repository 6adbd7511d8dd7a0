//! # rrsync-source
//!
//! Fetches the remote stations catalog and turns it into a playlist
//! [`Document`](rrsync_core::Document).
//!
//! [`StationSource`] is the seam between the sync pipeline and the network;
//! [`HttpStationSource`] is the only production implementation.

pub mod catalog;
pub mod client;
pub mod error;

pub use catalog::{parse_catalog, strip_query};
pub use client::{build_document, HttpStationSource, StationSource};
pub use error::SourceError;
