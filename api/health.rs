use latest_version::config::StoreKind;
use latest_version::{logging, version};
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init()?;
    let store = StoreKind::from_lookup(|name| std::env::var(name).ok())?;
    run(move |req| handler(req, store)).await
}

/// GET /api/health — liveness plus the configured store kind.
pub async fn handler(_req: Request, store: StoreKind) -> Result<Response<Body>, Error> {
    let payload = json!({
        "status": "ok",
        "version": version(),
        "store": store.as_str(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_store_kind() {
        let req = http::Request::builder()
            .uri("https://example.com/api/health")
            .body(Body::Empty)
            .unwrap();

        let resp = handler(req, StoreKind::Json).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "application/json");

        let Body::Text(text) = resp.body() else {
            panic!("expected text body");
        };
        let payload: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["store"], "json");
    }
}
