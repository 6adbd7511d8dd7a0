//! Error types for rrsync-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from rendering or writing a playlist.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while writing the rendered playlist.
    #[error("playlist io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading titles back from a playlist file.
///
/// These never cross the [`crate::read_titles`] boundary; they are only
/// visible through [`crate::reader::TitleRead::Malformed`].
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file exists but could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The XML could not be parsed.
    #[error("malformed playlist: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Text content is not valid in the declared encoding.
    #[error("undecodable text: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// An entity reference could not be resolved.
    #[error("bad entity reference: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// The document ended before every element was closed, or had no root.
    #[error("incomplete playlist document")]
    Incomplete,
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
