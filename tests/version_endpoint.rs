use std::sync::Arc;

use http::StatusCode;
use latest_version::config::{Config, StoreKind};
use latest_version::handler::VersionLookup;
use latest_version::store::{open_store, FileStore, JsonMapStore};

fn file_lookup(files: &[(&str, &str)]) -> (tempfile::TempDir, VersionLookup) {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }
    let lookup = VersionLookup::new(Arc::new(FileStore::new(dir.path())), "Project Version");
    (dir, lookup)
}

async fn get(lookup: &VersionLookup, query: &str) -> (StatusCode, String) {
    let response = lookup.handle_raw(None, Some(query)).await;
    (response.status, response.to_json().unwrap())
}

#[tokio::test]
async fn file_store_serves_plain_version() {
    let (_dir, lookup) = file_lookup(&[("teste.txt", "1.2.3\n")]);

    let (status, body) = get(&lookup, "project=teste").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"latest_version":"1.2.3"}"#);
}

#[tokio::test]
async fn file_store_serves_badge_for_stamp_suffix() {
    let (_dir, lookup) = file_lookup(&[("teste.txt", "1.2.3")]);

    let (status, body) = get(&lookup, "project=teste-stamp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"schemaVersion":1,"label":"Project Version","message":"1.2.3","color":"orange"}"#
    );
}

#[tokio::test]
async fn file_store_reports_missing_project() {
    let (_dir, lookup) = file_lookup(&[]);

    let (status, body) = get(&lookup, "project=projeto-inexistente").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Project not found"}"#);

    let (status, body) = get(&lookup, "other=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Project parameter is required"}"#);
}

#[tokio::test]
async fn post_body_takes_precedence_over_query() {
    let (_dir, lookup) = file_lookup(&[("alpha.txt", "1.0.0"), ("beta.txt", "2.0.0")]);

    let response = lookup
        .handle_raw(Some(br#"{"project": "beta"}"#), Some("project=alpha"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.to_json().unwrap(), r#"{"latest_version":"2.0.0"}"#);
}

#[tokio::test]
async fn json_map_store_applies_field_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("versions.json");
    std::fs::write(
        &path,
        r#"{
            "released": {"latest_version": "3.1.0", "timestamp": "2024-05-01T12:00:00Z"},
            "undated": {"latest_version": "0.0.1"},
            "empty": {}
        }"#,
    )
    .unwrap();
    let lookup = VersionLookup::new(Arc::new(JsonMapStore::new(&path)), "Project Version");

    assert_eq!(
        get(&lookup, "project=released").await,
        (StatusCode::OK, r#"{"latest_version":"3.1.0"}"#.to_string())
    );
    assert_eq!(
        get(&lookup, "project=undated").await,
        (StatusCode::NOT_FOUND, r#"{"error":"Release date not found"}"#.to_string())
    );
    assert_eq!(
        get(&lookup, "project=empty").await,
        (StatusCode::NOT_FOUND, r#"{"error":"Version not found"}"#.to_string())
    );
    assert_eq!(get(&lookup, "project=undated-stamp").await.0, StatusCode::OK);
}

#[tokio::test]
async fn unreadable_store_is_internal_error() {
    let config = Config {
        store: StoreKind::Json,
        versions_file: "/nonexistent/versions.json".into(),
        ..Config::default()
    };
    let lookup = VersionLookup::new(open_store(&config).unwrap(), config.badge_label.clone());

    for query in ["project=teste", "project=teste-stamp"] {
        let (status, body) = get(&lookup, query).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Internal server error"}"#);
    }
}
