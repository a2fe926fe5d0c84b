use serde::{Deserialize, Serialize};

/// Request body for the /api/version endpoint.
///
/// The same shape is used for the `project` query parameter of GET requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRequest {
    /// Project name, optionally suffixed with `-stamp` for a badge payload.
    #[serde(default)]
    pub project: Option<String>,
}

impl VersionRequest {
    pub fn for_project(project: impl Into<String>) -> Self {
        VersionRequest {
            project: Some(project.into()),
        }
    }

    /// Project name when present and non-empty.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref().filter(|p| !p.is_empty())
    }
}
