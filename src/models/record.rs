use serde::{Deserialize, Serialize};

/// The stored value associated with a project key.
///
/// Both fields are optional because stores may hold partially filled
/// records; the handler decides which absences are errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Latest published version (e.g., "1.2.3").
    #[serde(default)]
    pub latest_version: Option<String>,
    /// Release date of the latest version, RFC 3339 text.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ProjectRecord {
    /// Creates a record with both fields set.
    pub fn new(latest_version: impl Into<String>, timestamp: impl Into<String>) -> Self {
        ProjectRecord {
            latest_version: Some(latest_version.into()),
            timestamp: Some(timestamp.into()),
        }
    }

    /// Latest version, treating an empty string as absent.
    pub fn version(&self) -> Option<&str> {
        self.latest_version.as_deref().filter(|v| !v.is_empty())
    }

    /// Release timestamp, treating an empty string as absent.
    pub fn released_at(&self) -> Option<&str> {
        self.timestamp.as_deref().filter(|t| !t.is_empty())
    }
}
