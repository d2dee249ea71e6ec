use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    Res,
    error::StorageError,
    ports::PlaylistStore,
    types::{PlaylistDraft, StoredPlaylist},
};

/// Imported playlists, kept as a JSON array in a single file.
pub struct PlaylistStorage {
    path: PathBuf,
}

impl PlaylistStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all stored playlists in import order. A missing file is empty.
    pub async fn load(&self) -> Result<Vec<StoredPlaylist>, StorageError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Appends `draft` and writes the file back.
    ///
    /// Duplicate names are stored as separate entries.
    pub async fn add_playlist(
        &self,
        draft: &PlaylistDraft,
    ) -> Result<StoredPlaylist, StorageError> {
        let mut playlists = self.load().await?;

        let stored = StoredPlaylist {
            name: draft.name.clone(),
            cover: draft.cover.clone(),
            track_ids: draft.track_ids.clone(),
            imported_at: Utc::now().timestamp(),
        };
        playlists.push(stored.clone());

        self.persist(&playlists).await?;
        Ok(stored)
    }

    async fn persist(&self, playlists: &[StoredPlaylist]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(playlists)?;

        // write next to the target so the rename stays on one filesystem
        let tmp_path = self.path.with_extension("json.tmp");
        async_fs::write(&tmp_path, json).await?;
        if let Err(e) = async_fs::rename(&tmp_path, &self.path).await {
            let _ = async_fs::remove_file(&tmp_path).await;
            return Err(StorageError::Io(e));
        }
        Ok(())
    }
}

#[async_trait]
impl PlaylistStore for PlaylistStorage {
    async fn append(&self, playlist: &PlaylistDraft) -> Res<()> {
        self.add_playlist(playlist).await?;
        Ok(())
    }
}
