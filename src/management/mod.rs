mod playlist;

pub use playlist::PlaylistStorage;
