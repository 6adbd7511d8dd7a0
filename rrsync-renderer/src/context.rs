//! Template context — serializable rendering payload built from [`Document`].

use serde::{Deserialize, Serialize};

use rrsync_core::types::{Document, Track, VLC_NAMESPACE, XSPF_NAMESPACE, XSPF_VERSION};

use crate::error::RenderError;

/// Flat rendering payload for the playlist template.
///
/// Absent optional fields serialize as `null` so the template can test them
/// with a plain `{% if %}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistContext {
    pub namespace: String,
    pub vlc_namespace: String,
    pub version: String,
    pub title: String,
    pub tracks: Vec<TrackCtx>,
}

/// One `<track>` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackCtx {
    pub location: String,
    pub title: Option<String>,
    pub album: Option<String>,
    pub image: Option<String>,
    pub annotation: Option<String>,
    pub info: Option<String>,
}

impl From<&Track> for TrackCtx {
    fn from(track: &Track) -> Self {
        TrackCtx {
            location: track.location.clone(),
            title: track.title.clone(),
            album: track.album.clone(),
            image: track.image.clone(),
            annotation: track.annotation.clone(),
            info: track.info.clone(),
        }
    }
}

impl PlaylistContext {
    /// Build a [`PlaylistContext`] from a [`Document`], preserving track order.
    pub fn from_document(document: &Document) -> Self {
        PlaylistContext {
            namespace: XSPF_NAMESPACE.to_owned(),
            vlc_namespace: VLC_NAMESPACE.to_owned(),
            version: XSPF_VERSION.to_owned(),
            title: document.title().to_owned(),
            tracks: document.tracks().iter().map(TrackCtx::from).collect(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
