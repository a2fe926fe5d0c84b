//! Flat-file store: one `<project>.txt` per project holding its version.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::error::StoreError;
use crate::models::record::ProjectRecord;
use crate::store::VersionStore;

/// Reads versions from a directory of text files.
///
/// The file's modification time stands in for the release date.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        FileStore {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the version file for `key`, or None if `key` is not a plain file name.
    fn version_path(&self, key: &str) -> Option<PathBuf> {
        if !is_plain_name(key) {
            return None;
        }
        Some(self.dir.join(format!("{key}.txt")))
    }
}

/// True for names that cannot escape the versions directory.
pub(crate) fn is_plain_name(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && !key.contains(['/', '\\', '\0'])
}

#[async_trait::async_trait]
impl VersionStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<ProjectRecord>, StoreError> {
        let Some(path) = self.version_path(key) else {
            debug!("Rejected non-plain project key {:?}", key);
            return Ok(None);
        };
        debug!("Reading version file {:?}", path);

        let io_error = |source| StoreError::Io {
            path: path.display().to_string(),
            source,
        };

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(e)),
        };

        let modified = tokio::fs::metadata(&path)
            .await
            .map_err(io_error)?
            .modified()
            .ok()
            .map(|time| DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Secs, true));

        let version = contents.trim();
        Ok(Some(ProjectRecord {
            latest_version: (!version.is_empty()).then(|| version.to_string()),
            timestamp: modified,
        }))
    }
}
