use std::sync::Arc;

use latest_version::config::Config;
use latest_version::handler::VersionLookup;
use latest_version::logging;
use latest_version::store::open_store;
use tracing::info;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init()?;

    let config = Config::from_env()?;
    let store = open_store(&config)?;
    info!("Serving versions from {} store", config.store);

    let lookup = Arc::new(VersionLookup::new(store, config.badge_label));
    run(move |req| {
        let lookup = Arc::clone(&lookup);
        async move { handler(req, &lookup).await }
    })
    .await
}

/// GET /api/version?project=<name> or POST /api/version {"project": "<name>"}
///
/// Returns the latest version of a project, or a shields.io badge payload
/// when the name ends in `-stamp`.
pub async fn handler(req: Request, lookup: &VersionLookup) -> Result<Response<Body>, Error> {
    let body = match req.body() {
        Body::Empty => None,
        Body::Text(text) => Some(text.as_bytes()),
        Body::Binary(bytes) => Some(bytes.as_slice()),
    };

    let response = lookup.handle_raw(body, req.uri().query()).await;

    Ok(Response::builder()
        .status(response.status)
        .header("Content-Type", "application/json")
        .body(Body::Text(response.to_json()?))?)
}
