//! Spotify Playlist Importer Library
//!
//! This library imports a playlist hosted on Spotify into a local music
//! library. Every remote track is matched against the local library's search
//! API and the resulting list of local track ids is stored as a new playlist.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for the import pipeline
//! - `import` - Track resolution and the import orchestrator
//! - `library` - Client for the local library search API
//! - `management` - Local playlist storage
//! - `ports` - Traits for the remote catalog, local search and storage
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions such as playlist id extraction
//!
//! # Example
//!
//! ```
//! use plimport::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> plimport::Res<()> {
//!     config::load_env().await?;
//!     cli::import("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M".to_string()).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod library;
pub mod management;
pub mod ports;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed error type returned by the external collaborators.
///
/// Kept `Send + Sync` so errors can cross `.await` points inside the
/// multi-threaded tokio runtime.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A convenient Result type alias for operations that may fail.
///
/// # Example
///
/// ```
/// use plimport::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, BoxError>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Imported {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1. Only used by the CLI layer for fatal import
/// stages; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Import failed: {}", err);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Only {} of {} tracks matched", matched, total);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
