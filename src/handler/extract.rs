//! Request parsing: project name from a JSON body or the query string.

use crate::error::HandlerError;
use crate::models::request::VersionRequest;

/// Query parameter carrying the project name.
pub const PROJECT_PARAM: &str = "project";

/// Extract the requested project.
///
/// A non-empty `project` in the JSON body wins; otherwise the `project`
/// query parameter is used. A missing or blank body is not an error, a
/// body that is not a JSON object with an optional string `project` is.
pub fn extract_project(
    body: Option<&[u8]>,
    query: Option<&str>,
) -> Result<VersionRequest, HandlerError> {
    let body = body.filter(|b| !b.iter().all(u8::is_ascii_whitespace));

    if let Some(bytes) = body {
        let request: VersionRequest = serde_json::from_slice(bytes)?;
        if request.project().is_some() {
            return Ok(request);
        }
    }

    let project = query.and_then(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .find(|(name, _)| name == PROJECT_PARAM)
            .map(|(_, value)| value.into_owned())
    });

    Ok(VersionRequest { project })
}
