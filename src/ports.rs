//! Traits for the collaborators the importer talks to.
//!
//! Production implementations: [`crate::spotify::SpotifyClient`],
//! [`crate::library::LibraryClient`] and
//! [`crate::management::PlaylistStorage`]. Tests substitute fakes.

use async_trait::async_trait;

use crate::{
    Res,
    types::{LocalTrack, PlaylistDraft, PlaylistRef, PlaylistResponse, SearchQuery},
};

/// Source of remote playlist data.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Fetches name, cover images and the ordered track list in one request.
    async fn fetch_playlist(&self, token: &str, playlist: &PlaylistRef) -> Res<PlaylistResponse>;
}

/// Search capability of the local library.
#[async_trait]
pub trait TrackSearch: Send + Sync {
    /// Returns matching tracks in the library's own ranking order.
    async fn search(&self, query: &SearchQuery) -> Res<Vec<LocalTrack>>;
}

/// Destination of imported playlists.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    async fn append(&self, playlist: &PlaylistDraft) -> Res<()>;
}
