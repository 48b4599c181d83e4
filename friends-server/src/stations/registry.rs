//! Station name registry.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::StationName;

use super::error::StationError;

/// Stations recognized when no catalogue file is configured.
///
/// A cross-section of the Catalan and wider Spanish rail network, enough
/// for development and tests.
const DEFAULT_STATIONS: &[&str] = &[
    "Barcelona",
    "Madrid",
    "Girona",
    "Tarragona",
    "Lleida",
    "Valencia",
    "Zaragoza",
    "Terrassa",
    "Sabadell",
    "Sant Cugat",
    "Martorell",
    "Manresa",
    "Igualada",
    "Sitges",
    "Figueres",
];

/// Thread-safe station name vocabulary.
///
/// Journey origins and destinations must name a station in this registry.
/// The vocabulary is closed: it is loaded once from a JSON catalogue file
/// (or the built-in defaults) and can be reloaded in place.
#[derive(Clone)]
pub struct StationRegistry {
    inner: Arc<RwLock<HashSet<StationName>>>,
    source: Option<PathBuf>,
}

impl StationRegistry {
    /// Create a registry holding the built-in default catalogue.
    pub fn with_defaults() -> Self {
        Self::from_names(DEFAULT_STATIONS.iter().copied())
    }

    /// Create a registry from an iterator of raw names.
    ///
    /// Entries that fail the station-name format contract are skipped.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let set = build_set(names.into_iter().map(str::to_string));
        Self {
            inner: Arc::new(RwLock::new(set)),
            source: None,
        }
    }

    /// Create a registry by loading a JSON catalogue file.
    ///
    /// The file must contain a JSON array of station name strings.
    /// Malformed entries are skipped with a warning rather than failing
    /// the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let set = read_catalogue(path)?;

        Ok(Self {
            inner: Arc::new(RwLock::new(set)),
            source: Some(path.to_path_buf()),
        })
    }

    /// Check whether a name denotes a recognized station.
    pub async fn contains(&self, name: &StationName) -> bool {
        let guard = self.inner.read().await;
        guard.contains(name)
    }

    /// Get the number of stations in the registry.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the registry is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Reload the catalogue from the file this registry was loaded from.
    ///
    /// On success, replaces the current vocabulary. On failure, the
    /// existing vocabulary is preserved and the error is returned.
    pub async fn reload(&self) -> Result<usize, StationError> {
        let path = self.source.as_ref().ok_or(StationError::NoSource)?;
        let set = read_catalogue(path)?;
        let count = set.len();

        let mut guard = self.inner.write().await;
        *guard = set;

        Ok(count)
    }
}

/// Read and parse a catalogue file into a station set.
fn read_catalogue(path: &Path) -> Result<HashSet<StationName>, StationError> {
    let json = std::fs::read_to_string(path).map_err(|e| StationError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let names: Vec<String> = serde_json::from_str(&json).map_err(|e| StationError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(build_set(names))
}

/// Build the station set from raw names, skipping malformed entries.
fn build_set(names: impl IntoIterator<Item = String>) -> HashSet<StationName> {
    names
        .into_iter()
        .filter_map(|raw| match StationName::parse(&raw) {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!("skipping catalogue entry {:?}: {}", raw, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn station(name: &str) -> StationName {
        StationName::parse(name).unwrap()
    }

    #[tokio::test]
    async fn defaults_contain_known_stations() {
        let registry = StationRegistry::with_defaults();
        assert!(registry.contains(&station("Barcelona")).await);
        assert!(registry.contains(&station("Madrid")).await);
        assert!(!registry.contains(&station("Atlantis")).await);
    }

    #[tokio::test]
    async fn from_names_skips_malformed_entries() {
        let registry = StationRegistry::from_names(["Barcelona", "BCN", "Madrid"]);
        assert_eq!(registry.len().await, 2);
        assert!(registry.contains(&station("Barcelona")).await);
    }

    #[tokio::test]
    async fn load_from_catalogue_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"["Barcelona", "Madrid", "Girona"]"#).unwrap();

        let registry = StationRegistry::load(&path).unwrap();
        assert_eq!(registry.len().await, 3);
        assert!(registry.contains(&station("Girona")).await);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = StationRegistry::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(StationError::Io { .. })));
    }

    #[test]
    fn load_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = StationRegistry::load(&path);
        assert!(matches!(result, Err(StationError::Parse { .. })));
    }

    #[tokio::test]
    async fn reload_replaces_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, r#"["Barcelona"]"#).unwrap();

        let registry = StationRegistry::load(&path).unwrap();
        assert_eq!(registry.len().await, 1);

        std::fs::write(&path, r#"["Barcelona", "Madrid"]"#).unwrap();
        let count = registry.reload().await.unwrap();
        assert_eq!(count, 2);
        assert!(registry.contains(&station("Madrid")).await);
    }

    #[tokio::test]
    async fn failed_reload_preserves_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, r#"["Barcelona"]"#).unwrap();

        let registry = StationRegistry::load(&path).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        assert!(registry.reload().await.is_err());
        assert!(registry.contains(&station("Barcelona")).await);
    }

    #[tokio::test]
    async fn reload_without_source_fails() {
        let registry = StationRegistry::with_defaults();
        assert!(matches!(
            registry.reload().await,
            Err(StationError::NoSource)
        ));
    }
}
