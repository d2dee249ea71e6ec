use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;

use crate::{error::ImportError, types::PlaylistRef};

static PLAYLIST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"playlist/([A-Za-z0-9_]+)").expect("valid playlist path regex"));

static BARE_PLAYLIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9]{22}").expect("valid playlist id regex"));

/// Extracts the Spotify playlist id from a playlist URL or a bare id.
///
/// A `playlist/<id>` path segment wins over a bare 22 character alphanumeric
/// id; the bare form is only searched for when no path segment is present.
pub fn extract_playlist_id(input: &str) -> Result<PlaylistRef, ImportError> {
    if let Some(id) = PLAYLIST_PATH.captures(input).and_then(|c| c.get(1)) {
        return Ok(PlaylistRef::new(id.as_str()));
    }

    BARE_PLAYLIST_ID
        .find(input)
        .map(|id| PlaylistRef::new(id.as_str()))
        .ok_or_else(|| ImportError::InvalidInput {
            input: input.to_string(),
        })
}

pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
