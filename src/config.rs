//! Runtime configuration read from environment variables.
//!
//! Every setting has a default except the Firestore project id, which is
//! only required when the document store is selected.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default badge label shown on the left side of the shield.
pub const DEFAULT_BADGE_LABEL: &str = "Project Version";

/// Default directory holding `<project>.txt` version files.
pub const DEFAULT_VERSIONS_DIR: &str = "versions";

/// Default JSON map of project -> record.
pub const DEFAULT_VERSIONS_FILE: &str = "versions.json";

/// Default Firestore REST endpoint.
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";

/// Timeout for document store requests in milliseconds (10 seconds)
pub const DEFAULT_FIRESTORE_TIMEOUT_MS: u64 = 10_000;

/// Which backing store serves lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// Firestore collection `projects`, document id = project key.
    Firestore,
    /// Directory of `<project>.txt` files.
    #[default]
    File,
    /// Single JSON file mapping project -> record.
    Json,
}

impl StoreKind {
    /// Reads `VERSION_STORE` through `lookup`; unset or blank selects the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup("VERSION_STORE").filter(|v| !v.trim().is_empty()) {
            Some(kind) => kind.parse(),
            None => Ok(StoreKind::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Firestore => "firestore",
            StoreKind::File => "file",
            StoreKind::Json => "json",
        }
    }
}

impl std::str::FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StoreKind::Firestore),
            "file" => Ok(StoreKind::File),
            "json" => Ok(StoreKind::Json),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Firestore connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: StoreKind,
    pub versions_dir: PathBuf,
    pub versions_file: PathBuf,
    /// Present only when `store` is `Firestore`.
    pub firestore: Option<FirestoreConfig>,
    pub badge_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: StoreKind::default(),
            versions_dir: PathBuf::from(DEFAULT_VERSIONS_DIR),
            versions_file: PathBuf::from(DEFAULT_VERSIONS_FILE),
            firestore: None,
            badge_label: DEFAULT_BADGE_LABEL.to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let store = StoreKind::from_lookup(&lookup)?;

        let firestore = if store == StoreKind::Firestore {
            let project_id = get("FIRESTORE_PROJECT_ID")
                .ok_or(ConfigError::Missing("FIRESTORE_PROJECT_ID"))?;
            let timeout_ms = match get("FIRESTORE_TIMEOUT_MS") {
                Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name: "FIRESTORE_TIMEOUT_MS",
                    value: raw,
                })?,
                None => DEFAULT_FIRESTORE_TIMEOUT_MS,
            };
            Some(FirestoreConfig {
                project_id,
                base_url: get("FIRESTORE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string()),
                timeout_ms,
            })
        } else {
            None
        };

        Ok(Config {
            store,
            versions_dir: get("VERSIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.versions_dir),
            versions_file: get("VERSIONS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.versions_file),
            firestore,
            badge_label: get("BADGE_LABEL").unwrap_or(defaults.badge_label),
        })
    }
}
