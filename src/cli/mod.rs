//! # CLI Module
//!
//! User-facing commands. Each command wires the configured collaborators
//! together, calls into the library and reports the outcome with the crate's
//! console macros.
//!
//! - [`import`] - imports a Spotify playlist into the local library
//! - [`extract`] - prints the playlist id found in a URL or string
//! - [`playlists`] - lists playlists imported so far
//!
//! ```bash
//! plimport import https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! plimport extract "spotify:playlist:37i9dQZF1DXcBWIGoYBM5M"
//! plimport playlists --search chill
//! ```

mod extract;
mod import;
mod playlists;

pub use extract::extract;
pub use import::import;
pub use playlists::playlists;
