//! Station catalogue error types.

use std::path::PathBuf;

/// Errors that can occur when loading the station catalogue.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Failed to read the catalogue file
    #[error("failed to read station catalogue {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalogue file is not a JSON array of strings
    #[error("failed to parse station catalogue {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Registry was built in memory; there is no file to reload from
    #[error("no catalogue file to reload from")]
    NoSource,
}
