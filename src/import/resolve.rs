use crate::{
    error::NotFound,
    ports::TrackSearch,
    types::{LocalTrack, LocalTrackId, SearchQuery},
};

/// Builds the free-text search query for a remote track.
///
/// Title and artist are joined by one space; an unknown artist leaves a
/// trailing space.
pub fn search_query(title: &str, artist: &str) -> String {
    format!("{} {}", title, artist)
}

/// Maps a remote track onto a local track id.
///
/// The first search result wins. An empty result and a failed search call
/// both come back as [`NotFound`].
pub async fn resolve_track<T>(
    search: &T,
    title: &str,
    artist: &str,
) -> Result<LocalTrackId, NotFound>
where
    T: TrackSearch + ?Sized,
{
    let query = SearchQuery::tracks(search_query(title, artist));

    match search.search(&query).await {
        Ok(tracks) => tracks
            .first()
            .and_then(LocalTrack::track_id)
            .ok_or(NotFound { query: query.query }),
        Err(_) => Err(NotFound { query: query.query }),
    }
}
