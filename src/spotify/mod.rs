//! # Spotify Integration Module
//!
//! Read-only access to the Spotify Web API. The importer needs exactly one
//! endpoint:
//!
//! - `GET /playlists/{playlist_id}` - playlist name, cover images and the
//!   first page of tracks
//!
//! Requests carry a bearer token supplied by the caller; obtaining or
//! refreshing tokens is outside this crate. Failed requests are not retried.
//!
//! ## Usage
//!
//! ```rust
//! let client = spotify::SpotifyClient::new(config::spotify_apiurl());
//! let playlist_id = utils::extract_playlist_id(input)?;
//! let playlist = client.get_playlist(&token, &playlist_id).await?;
//! println!("{} has {} tracks", playlist.name, playlist.tracks.items.len());
//! ```

pub mod playlist;

pub use playlist::SpotifyClient;
