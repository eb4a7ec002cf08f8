//! Environment-driven runtime configuration.

use std::path::PathBuf;

/// Runtime configuration for the API binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to bind.
    pub port: u16,
    /// Path of the JSON item document.
    pub data_file: PathBuf,
    /// Directory where uploaded images are stored and served from.
    pub uploads_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to dev defaults
    /// (and warning when a value is malformed).
    pub fn from_env() -> Self {
        let port = std::env::var("TROVE_PORT")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!(%raw, "TROVE_PORT is not a valid port; using 3001");
                    None
                }
            })
            .unwrap_or(3001);

        let data_file = std::env::var("TROVE_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/items.json"));

        let uploads_dir = std::env::var("TROVE_UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        Self {
            port,
            data_file,
            uploads_dir,
        }
    }
}
