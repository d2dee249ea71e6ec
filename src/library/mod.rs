//! Client for the local music library.
//!
//! The library exposes a search endpoint returning tracks in its own ranking
//! order:
//!
//! - `GET /search?q=<query>&type=track` -> `{ "tracks": [ { "id": ... } ] }`

pub mod search;

pub use search::LibraryClient;
