use tabled::Table;

use crate::{
    config, error, info, management::PlaylistStorage, types::PlaylistTableRow, utils,
};

pub async fn playlists(search: Option<String>) {
    let storage = PlaylistStorage::new(config::playlists_file());

    let mut playlists = match storage.load().await {
        Ok(playlists) => playlists,
        Err(e) => error!(
            "Failed to load playlists from {}. Err: {}",
            storage.path().display(),
            e
        ),
    };

    if let Some(search) = search {
        let search_term = search.to_lowercase();
        playlists.retain(|p| p.name.to_lowercase().contains(&search_term));
    }

    if playlists.is_empty() {
        info!("No imported playlists found.");
        return;
    }

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            tracks: p.track_ids.len(),
            cover: p.cover,
            imported: utils::format_timestamp(p.imported_at),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
