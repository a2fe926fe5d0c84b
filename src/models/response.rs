use serde::{Deserialize, Serialize};

/// Badge color reported to shields.io.
pub const BADGE_COLOR: &str = "orange";

/// shields.io endpoint schema version.
pub const BADGE_SCHEMA_VERSION: u8 = 1;

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Plain success body: `{"latest_version": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionBody {
    pub latest_version: String,
}

/// Badge payload understood by the shields.io endpoint badge.
///
/// `message` is null when the record has no version; stamp requests
/// skip the version check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeBody {
    pub schema_version: u8,
    pub label: String,
    pub message: Option<String>,
    pub color: String,
}

impl BadgeBody {
    pub fn new(label: impl Into<String>, message: Option<String>) -> Self {
        BadgeBody {
            schema_version: BADGE_SCHEMA_VERSION,
            label: label.into(),
            message,
            color: BADGE_COLOR.to_string(),
        }
    }
}

/// Every body the version endpoint can return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Error(ErrorBody),
    Version(VersionBody),
    Badge(BadgeBody),
}
