//! JSON map store: a single file of `{"<project>": {"latest_version": ..., "timestamp": ...}}`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::models::record::ProjectRecord;
use crate::store::VersionStore;

pub struct JsonMapStore {
    path: PathBuf,
}

impl JsonMapStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonMapStore {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl VersionStore for JsonMapStore {
    /// Re-reads the file on every lookup so edits are picked up without a restart.
    async fn get(&self, key: &str) -> Result<Option<ProjectRecord>, StoreError> {
        debug!("Reading version map {:?}", self.path);

        let contents = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        let mut records: HashMap<String, ProjectRecord> = serde_json::from_slice(&contents)
            .map_err(|e| StoreError::InvalidData(format!("{}: {}", self.path.display(), e)))?;

        Ok(records.remove(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_map(contents: &str) -> (tempfile::TempDir, JsonMapStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("versions.json");
        std::fs::write(&path, contents).unwrap();
        (dir, JsonMapStore::new(path))
    }

    #[tokio::test]
    async fn test_looks_up_record_by_key() {
        let (_dir, store) = write_map(
            r#"{
                "teste": {"latest_version": "1.2.3", "timestamp": "2024-05-01T12:00:00Z"},
                "other": {"latest_version": "0.1.0"}
            }"#,
        );

        assert_eq!(
            store.get("teste").await.unwrap(),
            Some(ProjectRecord::new("1.2.3", "2024-05-01T12:00:00Z"))
        );
        assert_eq!(store.get("other").await.unwrap().unwrap().timestamp, None);
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let store = JsonMapStore::new("/nonexistent/versions.json");
        assert!(matches!(store.get("teste").await, Err(StoreError::Io { .. })));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let (_dir, store) = write_map("[1, 2, 3]");
        assert!(matches!(
            store.get("teste").await,
            Err(StoreError::InvalidData(_))
        ));
    }
}
