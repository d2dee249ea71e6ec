use crate::{
    config::Config, error, import::PlaylistImporter, info, library::LibraryClient,
    management::PlaylistStorage, spotify::SpotifyClient, success, warning,
};

pub async fn import(input: String) {
    let config = Config::from_env();

    let importer = PlaylistImporter::new(
        SpotifyClient::new(&config.spotify_api_url),
        LibraryClient::new(&config.library_api_url),
        PlaylistStorage::new(&config.playlists_file),
    );

    info!("Importing playlist from {}", input);

    let outcome = match importer
        .import(config.spotify_token.as_deref(), &input)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => error!("{}", e),
    };

    let matched = outcome.playlist.track_ids.len();
    if matched < outcome.remote_tracks {
        warning!(
            "{} of {} tracks could not be matched in the local library",
            outcome.remote_tracks - matched,
            outcome.remote_tracks
        );
    }

    success!(
        "Imported playlist \"{}\" with {} tracks into {}",
        outcome.playlist.name,
        matched,
        config.playlists_file.display()
    );
}
