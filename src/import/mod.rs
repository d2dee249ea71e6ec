//! # Import Module
//!
//! Turns a Spotify playlist into a local one:
//!
//! ```text
//! input string -> playlist id -> fetch remote playlist
//!              -> resolve each track against the local library (in order)
//!              -> PlaylistDraft -> append to storage
//! ```
//!
//! Stages before resolution and the final write are fatal. Resolution is
//! best effort: a track that does not resolve is left out of the playlist.
//! Tracks are resolved one after another so the local playlist keeps the
//! remote order.

pub mod resolve;

use crate::{
    error::ImportError,
    ports::{PlaylistSource, PlaylistStore, TrackSearch},
    types::{ImportOutcome, LocalTrackId, PlaylistDraft},
    utils,
};

pub use resolve::resolve_track;

pub struct PlaylistImporter<S, T, P> {
    source: S,
    search: T,
    store: P,
}

impl<S, T, P> PlaylistImporter<S, T, P>
where
    S: PlaylistSource,
    T: TrackSearch,
    P: PlaylistStore,
{
    pub fn new(source: S, search: T, store: P) -> Self {
        Self {
            source,
            search,
            store,
        }
    }

    /// Imports the playlist named by `input` (URL or bare id).
    ///
    /// `credential` is the Spotify bearer token. It is checked first; when it
    /// is missing or blank no request is made at all.
    ///
    /// # Errors
    ///
    /// - [`ImportError::MissingCredential`] - no token
    /// - [`ImportError::InvalidInput`] - no playlist id in `input`
    /// - [`ImportError::RemoteFetch`] - the playlist could not be fetched
    /// - [`ImportError::Persistence`] - the playlist could not be stored
    ///
    /// Nothing is stored unless every fatal stage succeeds.
    pub async fn import(
        &self,
        credential: Option<&str>,
        input: &str,
    ) -> Result<ImportOutcome, ImportError> {
        let token = credential
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ImportError::MissingCredential)?;

        let playlist_id = utils::extract_playlist_id(input)?;

        let remote = self
            .source
            .fetch_playlist(token, &playlist_id)
            .await
            .map_err(|source| ImportError::RemoteFetch {
                playlist: playlist_id.to_string(),
                source,
            })?;

        let remote_tracks = remote.remote_tracks();

        let mut track_ids: Vec<LocalTrackId> = Vec::with_capacity(remote_tracks.len());
        for track in &remote_tracks {
            if let Ok(id) = resolve_track(&self.search, &track.title, &track.artist).await {
                track_ids.push(id);
            }
        }

        let playlist = PlaylistDraft {
            name: remote.name.clone(),
            cover: remote.cover(),
            track_ids,
        };

        self.store
            .append(&playlist)
            .await
            .map_err(|source| ImportError::Persistence {
                name: playlist.name.clone(),
                source,
            })?;

        Ok(ImportOutcome {
            playlist,
            remote_tracks: remote.tracks.items.len(),
        })
    }
}
