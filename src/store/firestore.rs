//! Firestore REST API implementation
//!
//! Reads `projects/{key}` documents. Authentication is left to the
//! environment (e.g. the Firestore emulator needs none).

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::FirestoreConfig;
use crate::error::{ConfigError, StoreError};
use crate::models::record::ProjectRecord;
use crate::store::VersionStore;

/// Collection holding one document per project.
pub const PROJECTS_COLLECTION: &str = "projects";

/// Document returned by the Firestore REST API.
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: HashMap<String, FirestoreValue>,
}

/// Typed value encoding used by Firestore (`{"stringValue": "..."}` etc).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirestoreValue {
    string_value: Option<String>,
    timestamp_value: Option<String>,
    integer_value: Option<String>,
    double_value: Option<f64>,
}

impl FirestoreValue {
    /// Text form of scalar values; null, maps, arrays and the like yield None.
    fn into_text(self) -> Option<String> {
        self.string_value
            .or(self.timestamp_value)
            .or(self.integer_value)
            .or_else(|| self.double_value.map(|d| d.to_string()))
    }
}

/// Firestore rejects these ids, and the URL path would resolve `.` and `..`
/// to the collection itself.
fn is_document_id(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !(key.len() > 4 && key.starts_with("__") && key.ends_with("__"))
}

pub struct FirestoreStore {
    client: reqwest::Client,
    documents_url: url::Url,
}

impl FirestoreStore {
    pub fn new(config: &FirestoreConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("latest-version/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        let invalid = || ConfigError::Invalid {
            name: "FIRESTORE_BASE_URL",
            value: config.base_url.clone(),
        };
        let mut documents_url = url::Url::parse(&config.base_url).map_err(|_| invalid())?;
        documents_url
            .path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                config.project_id.as_str(),
                "databases",
                "(default)",
                "documents",
                PROJECTS_COLLECTION,
            ]);

        Ok(FirestoreStore {
            client,
            documents_url,
        })
    }

    /// URL of the document for `key`; the key is a single percent-encoded segment.
    fn document_url(&self, key: &str) -> url::Url {
        let mut url = self.documents_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(key);
        }
        url
    }
}

#[async_trait::async_trait]
impl VersionStore for FirestoreStore {
    async fn get(&self, key: &str) -> Result<Option<ProjectRecord>, StoreError> {
        if !is_document_id(key) {
            debug!("Rejected invalid document id {:?}", key);
            return Ok(None);
        }

        let url = self.document_url(key);
        debug!("Fetching Firestore document {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            warn!("Firestore returned status {}: {}", status, url);
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                key: key.to_string(),
            });
        }

        let mut document: FirestoreDocument = response.json().await.map_err(|e| {
            warn!("Failed to parse Firestore document: {}", e);
            StoreError::InvalidData(e.to_string())
        })?;

        Ok(Some(ProjectRecord {
            latest_version: document
                .fields
                .remove("latest_version")
                .and_then(FirestoreValue::into_text),
            timestamp: document
                .fields
                .remove("timestamp")
                .and_then(FirestoreValue::into_text),
        }))
    }
}
