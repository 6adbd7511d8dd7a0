//! Domain types for the station playlist.
//!
//! A [`Document`] owns an ordered list of [`Track`]s. Optional track fields are
//! stored as `Option<String>`; an empty string is never stored, so absence and
//! emptiness collapse to `None` at insertion time.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fixed document metadata
// ---------------------------------------------------------------------------

/// Title text of every playlist document.
pub const PLAYLIST_TITLE: &str = "Playlist";

/// Default XSPF namespace on the root element.
pub const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";

/// VLC extension namespace, bound to the `vlc` prefix.
pub const VLC_NAMESPACE: &str = "http://www.videolan.org/vlc/playlist/ns/0/";

/// Value of the root `version` attribute.
pub const XSPF_VERSION: &str = "1";

/// Separator used when flattening genre names into one annotation.
pub const GENRE_SEPARATOR: &str = ", ";

// ---------------------------------------------------------------------------
// Station
// ---------------------------------------------------------------------------

/// One remote catalog entry, already normalized by the station source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub stream_url: String,
    pub title: String,
    /// Tooltip / description text; becomes the track album.
    pub tooltip: String,
    /// Icon URL with any query string removed.
    pub icon_url: String,
    /// Genre names in server order.
    pub genres: Vec<String>,
    pub share_url: String,
}

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Genre input for [`Document::add_track`].
///
/// Either an already joined annotation or the individual names, which are
/// joined with [`GENRE_SEPARATOR`] in the given order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Genre<'a> {
    #[default]
    None,
    Joined(&'a str),
    Names(&'a [String]),
}

impl Genre<'_> {
    /// The annotation text, or `None` when it would be empty.
    pub fn annotation(&self) -> Option<String> {
        match self {
            Genre::None => None,
            Genre::Joined(s) => non_empty(s),
            Genre::Names(names) => non_empty(&names.join(GENRE_SEPARATOR)),
        }
    }
}

// ---------------------------------------------------------------------------
// Track
// ---------------------------------------------------------------------------

/// A single playlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Stream location; always present and non-empty.
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Optional descriptive fields accepted by [`Document::add_track`].
///
/// Empty strings are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackFields<'a> {
    pub title: &'a str,
    pub album: &'a str,
    pub image_url: &'a str,
    pub genre: Genre<'a>,
    pub share_url: &'a str,
}

impl<'a> From<&'a Station> for TrackFields<'a> {
    fn from(station: &'a Station) -> Self {
        TrackFields {
            title: &station.title,
            album: &station.tooltip,
            image_url: &station.icon_url,
            genre: Genre::Names(&station.genres),
            share_url: &station.share_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// In-memory playlist: a fixed title plus tracks in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    title: String,
    tracks: Vec<Track>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty playlist titled [`PLAYLIST_TITLE`].
    pub fn new() -> Self {
        Document {
            title: PLAYLIST_TITLE.to_owned(),
            tracks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Append a track. `location` must be non-empty; the caller guarantees it.
    pub fn add_track(&mut self, location: &str, fields: TrackFields<'_>) {
        self.tracks.push(Track {
            location: location.to_owned(),
            title: non_empty(fields.title),
            album: non_empty(fields.album),
            image: non_empty(fields.image_url),
            annotation: fields.genre.annotation(),
            info: non_empty(fields.share_url),
        });
    }

    /// Append a track whose genre annotation is already joined.
    pub fn add_track_with_genre_string(
        &mut self,
        location: &str,
        title: &str,
        album: &str,
        image_url: &str,
        genre: &str,
        share_url: &str,
    ) {
        self.add_track(
            location,
            TrackFields {
                title,
                album,
                image_url,
                genre: Genre::Joined(genre),
                share_url,
            },
        );
    }

    /// Append a track, joining `genres` with [`GENRE_SEPARATOR`].
    pub fn add_track_with_genre_list(
        &mut self,
        location: &str,
        title: &str,
        album: &str,
        image_url: &str,
        genres: &[String],
        share_url: &str,
    ) {
        self.add_track(
            location,
            TrackFields {
                title,
                album,
                image_url,
                genre: Genre::Names(genres),
                share_url,
            },
        );
    }

    /// Playlist title followed by every track title, in document order.
    pub fn titles(&self) -> Vec<String> {
        std::iter::once(self.title.clone())
            .chain(self.tracks.iter().filter_map(|t| t.title.clone()))
            .collect()
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
