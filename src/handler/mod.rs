/// Version Lookup Handler — maps a project request to a JSON response.
///
/// Parses the project name, reads its record from the configured store
/// and picks the plain or badge payload. Every failure ends in a final
/// response; nothing is retried.

pub mod extract;
pub mod project;

use std::sync::Arc;

use http::StatusCode;
use tracing::{error, info, info_span, Instrument};

use crate::error::HandlerError;
use crate::models::request::VersionRequest;
use crate::models::response::{BadgeBody, ErrorBody, ResponseBody, VersionBody};
use crate::store::VersionStore;

pub use extract::extract_project;
pub use project::ProjectName;

pub const PROJECT_REQUIRED: &str = "Project parameter is required";
pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const VERSION_NOT_FOUND: &str = "Version not found";
pub const RELEASE_DATE_NOT_FOUND: &str = "Release date not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Status code plus body, ready to be serialized by the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn error(status: StatusCode, message: &str) -> Self {
        ApiResponse {
            status,
            body: ResponseBody::Error(ErrorBody {
                error: message.to_string(),
            }),
        }
    }

    fn ok(body: ResponseBody) -> Self {
        ApiResponse {
            status: StatusCode::OK,
            body,
        }
    }

    /// Compact JSON text of the body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}

/// Answers version requests from a single injected store.
pub struct VersionLookup {
    store: Arc<dyn VersionStore>,
    badge_label: String,
}

impl VersionLookup {
    /// Creates a handler over `store`, labelling badges with `badge_label`.
    pub fn new(store: Arc<dyn VersionStore>, badge_label: impl Into<String>) -> Self {
        VersionLookup {
            store,
            badge_label: badge_label.into(),
        }
    }

    /// Handle a raw HTTP request: optional body bytes and query string.
    pub async fn handle_raw(&self, body: Option<&[u8]>, query: Option<&str>) -> ApiResponse {
        match extract_project(body, query) {
            Ok(request) => self.handle(&request).await,
            Err(e) => internal_error(&e),
        }
    }

    /// Handle an already parsed request.
    pub async fn handle(&self, request: &VersionRequest) -> ApiResponse {
        let Some(name) = request.project().and_then(ProjectName::parse) else {
            return ApiResponse::error(StatusCode::BAD_REQUEST, PROJECT_REQUIRED);
        };

        let span = info_span!("version_lookup", project = %name, key = %name.key);
        match self.lookup(&name).instrument(span).await {
            Ok(response) => response,
            Err(e) => internal_error(&e),
        }
    }

    async fn lookup(&self, name: &ProjectName) -> Result<ApiResponse, HandlerError> {
        let Some(record) = self.store.get(&name.key).await? else {
            info!("Project not found");
            return Ok(ApiResponse::error(StatusCode::NOT_FOUND, PROJECT_NOT_FOUND));
        };

        if name.is_stamp {
            return Ok(ApiResponse::ok(ResponseBody::Badge(BadgeBody::new(
                self.badge_label.as_str(),
                record.version().map(str::to_string),
            ))));
        }

        let Some(version) = record.version() else {
            info!("Record has no version");
            return Ok(ApiResponse::error(StatusCode::NOT_FOUND, VERSION_NOT_FOUND));
        };

        if record.released_at().is_none() {
            info!("Record has no release date");
            return Ok(ApiResponse::error(
                StatusCode::NOT_FOUND,
                RELEASE_DATE_NOT_FOUND,
            ));
        }

        Ok(ApiResponse::ok(ResponseBody::Version(VersionBody {
            latest_version: version.to_string(),
        })))
    }
}

fn internal_error(e: &HandlerError) -> ApiResponse {
    error!("Error retrieving project: {}", e);
    ApiResponse::error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}
