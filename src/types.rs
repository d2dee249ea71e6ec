use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// Canonical Spotify playlist id, as produced by `utils::extract_playlist_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaylistRef(String);

impl PlaylistRef {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a track in the local library. Opaque to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalTrackId(String);

impl LocalTrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalTrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Title and primary artist of a track on the remote playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTrack {
    pub title: String,
    pub artist: String,
}

/// Playlist assembled during one import and handed to storage as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDraft {
    pub name: String,
    pub cover: String,
    pub track_ids: Vec<LocalTrackId>,
}

/// Result of a successful import.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub playlist: PlaylistDraft,
    /// Number of tracks on the remote playlist, matched or not.
    pub remote_tracks: usize,
}

// Spotify `GET /playlists/{id}`

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub name: String,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    pub tracks: PlaylistTracks,
}

impl PlaylistResponse {
    /// URL of the first cover image, or an empty string.
    pub fn cover(&self) -> String {
        self.images
            .as_ref()
            .and_then(|images| images.first())
            .map(|image| image.url.clone())
            .unwrap_or_default()
    }

    /// Tracks in playlist order. Items without a track object are skipped.
    pub fn remote_tracks(&self) -> Vec<RemoteTrack> {
        self.tracks
            .items
            .iter()
            .filter_map(|item| item.track.as_ref())
            .map(|track| RemoteTrack {
                title: track.name.clone(),
                artist: track
                    .artists
                    .first()
                    .map(|artist| artist.name.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracks {
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

// Local library `GET /search`

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Track,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Track => "track",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub result_type: ResultType,
}

impl SearchQuery {
    pub fn tracks(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            result_type: ResultType::Track,
        }
    }
}

/// Entries are kept as raw JSON; only the entry that gets used is inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<Vec<Value>>,
}

impl SearchResponse {
    pub fn into_tracks(self) -> Vec<LocalTrack> {
        self.tracks
            .unwrap_or_default()
            .into_iter()
            .map(|entry| LocalTrack {
                id: entry.get("id").cloned().unwrap_or(Value::Null),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalTrack {
    #[serde(default)]
    pub id: Value,
}

impl LocalTrack {
    /// The library id as a string. Strings are taken verbatim, numbers are
    /// rendered in decimal (`7.0` becomes `"7"`). Anything else has no id.
    pub fn track_id(&self) -> Option<LocalTrackId> {
        match &self.id {
            Value::String(id) => Some(LocalTrackId::new(id.clone())),
            Value::Number(n) => {
                if let Some(id) = n.as_u64() {
                    Some(LocalTrackId::new(id.to_string()))
                } else if let Some(id) = n.as_i64() {
                    Some(LocalTrackId::new(id.to_string()))
                } else {
                    let id = n.as_f64()?;
                    if id.fract() == 0.0 && id.abs() < 9_007_199_254_740_992.0 {
                        Some(LocalTrackId::new((id as i64).to_string()))
                    } else {
                        Some(LocalTrackId::new(id.to_string()))
                    }
                }
            }
            _ => None,
        }
    }
}

// Local storage

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPlaylist {
    pub name: String,
    pub cover: String,
    pub track_ids: Vec<LocalTrackId>,
    pub imported_at: i64,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: usize,
    pub cover: String,
    pub imported: String,
}
