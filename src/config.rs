//! Configuration management for the playlist importer.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Real environment variables win over the
//! file.
//!
//! The Spotify token is read here but never checked here: a missing token is
//! reported by the import orchestrator before it touches the network.

use std::{
    env,
    path::{Path, PathBuf},
};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_LIBRARY_API_URL: &str = "http://localhost:8080/api";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives at:
/// - Linux: `~/.local/share/plimport/.env`
/// - macOS: `~/Library/Application Support/plimport/.env`
/// - Windows: `%LOCALAPPDATA%/plimport/.env`
///
/// See [`load_env_from`] for how the file is applied.
pub async fn load_env() -> Result<(), String> {
    let dir = app_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    load_env_from(&dir.join(".env"))
}

/// Loads variables from the `.env` file at `path`.
///
/// A missing file is not an error. A file that exists but cannot be parsed is.
/// Variables already set in the process environment are left untouched.
pub fn load_env_from(path: &Path) -> Result<(), String> {
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Returns the Spotify bearer token from `SPOTIFY_TOKEN`, if set and non-empty.
pub fn spotify_token() -> Option<String> {
    env::var("SPOTIFY_TOKEN")
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the base URL of the local library API.
pub fn library_apiurl() -> String {
    env::var("LIBRARY_API_URL").unwrap_or_else(|_| DEFAULT_LIBRARY_API_URL.to_string())
}

/// Returns the path of the JSON file imported playlists are appended to.
pub fn playlists_file() -> PathBuf {
    env::var("PLIMPORT_PLAYLISTS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| app_dir().join("playlists.json"))
}

fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("plimport");
    path
}

/// Snapshot of all settings, injected into the import collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_token: Option<String>,
    pub spotify_api_url: String,
    pub library_api_url: String,
    pub playlists_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            spotify_token: spotify_token(),
            spotify_api_url: spotify_apiurl(),
            library_api_url: library_apiurl(),
            playlists_file: playlists_file(),
        }
    }
}
