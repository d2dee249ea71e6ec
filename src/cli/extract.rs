use crate::{error, utils};

pub fn extract(input: String) {
    match utils::extract_playlist_id(&input) {
        Ok(playlist_id) => println!("{}", playlist_id),
        Err(e) => error!("{}", e),
    }
}
