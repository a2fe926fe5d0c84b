//! Backing stores for project version records.
//!
//! The handler only sees the [`VersionStore`] trait; which adapter serves
//! lookups is chosen once at startup from [`Config`].

pub mod file;
pub mod firestore;
pub mod json_map;

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::config::{Config, StoreKind};
use crate::error::{ConfigError, StoreError};
use crate::models::record::ProjectRecord;

pub use file::FileStore;
pub use firestore::FirestoreStore;
pub use json_map::JsonMapStore;

/// Read-only key lookup of project records.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionStore: Send + Sync {
    /// Fetches the record stored under `key`.
    ///
    /// # Returns
    /// * `Ok(Some(record))` - The project exists
    /// * `Ok(None)` - No record for this key
    /// * `Err(StoreError)` - The store could not be read
    async fn get(&self, key: &str) -> Result<Option<ProjectRecord>, StoreError>;
}

/// Builds the store selected by `config`.
pub fn open_store(config: &Config) -> Result<Arc<dyn VersionStore>, ConfigError> {
    let store: Arc<dyn VersionStore> = match config.store {
        StoreKind::Firestore => {
            let firestore = config
                .firestore
                .as_ref()
                .ok_or(ConfigError::Missing("FIRESTORE_PROJECT_ID"))?;
            Arc::new(FirestoreStore::new(firestore)?)
        }
        StoreKind::File => Arc::new(FileStore::new(&config.versions_dir)),
        StoreKind::Json => Arc::new(JsonMapStore::new(&config.versions_file)),
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_store_rejects_firestore_without_settings() {
        let config = Config {
            store: StoreKind::Firestore,
            firestore: None,
            ..Config::default()
        };
        assert!(matches!(open_store(&config), Err(ConfigError::Missing(_))));
    }

    #[tokio::test]
    async fn test_open_store_defaults_to_file_store() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("teste.txt"), "1.2.3\n").unwrap();
        let config = Config {
            versions_dir: dir.path().to_path_buf(),
            ..Config::default()
        };

        let store = open_store(&config).unwrap();
        let record = store.get("teste").await.unwrap().unwrap();
        assert_eq!(record.version(), Some("1.2.3"));
    }
}
