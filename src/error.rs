//! Error types for the import pipeline.
//!
//! [`ImportError`] covers every fatal stage of an import. Per-track failures
//! never reach it: the resolver reports them as [`NotFound`] and the
//! orchestrator drops the track.

use thiserror::Error;

use crate::BoxError;

/// Fatal errors that abort an import before anything is persisted.
#[derive(Debug, Error)]
pub enum ImportError {
    /// No Spotify access token was supplied. Raised before any network call.
    #[error("Spotify token not configured. Set SPOTIFY_TOKEN in your environment or .env file")]
    MissingCredential,

    /// The input contained neither a `playlist/<id>` path nor a bare id.
    #[error("Invalid playlist URL or ID: {input:?}")]
    InvalidInput { input: String },

    /// Fetching or decoding the remote playlist failed.
    #[error("Failed to fetch playlist {playlist}: {source}")]
    RemoteFetch {
        playlist: String,
        #[source]
        source: BoxError,
    },

    /// The playlist could not be written to local storage.
    #[error("Failed to store playlist {name:?}: {source}")]
    Persistence {
        name: String,
        #[source]
        source: BoxError,
    },
}

/// A remote track had no usable match in the local library.
///
/// Also returned when the search call itself failed; callers cannot tell the
/// two apart.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No local match for {query:?}")]
pub struct NotFound {
    pub query: String,
}

/// Errors raised by the JSON playlist store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed playlist file: {0}")]
    Serde(#[from] serde_json::Error),
}
