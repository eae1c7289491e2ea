// SPDX-License-Identifier: MPL-2.0
use axum::extract::{Multipart, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use person_lens::app::config::{self, Config};
use person_lens::i18n::fluent::I18n;
use person_lens::search::{ImageUpload, SearchClient, SearchError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::tempdir;

/// Starts `router` on an ephemeral local port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub service stopped");
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> SearchClient {
    SearchClient::new(base_url).expect("Failed to build client")
}

async fn echo_text_search(Json(body): Json<Value>) -> Json<Value> {
    let top_k = body["top_k"].as_u64().unwrap_or_default();
    Json(json!({
        "results": [{
            "id": "1",
            "score": 0.92,
            "payload": {
                "path": "/a/b/x.jpg",
                "metadata": {"person_id": 7, "clothes_id": 2, "top_k": top_k}
            }
        }, {
            "id": 42,
            "score": "0.5",
            "payload": {}
        }]
    }))
}

#[tokio::test]
async fn text_search_maps_results_in_order() {
    let base = serve(Router::new().route("/search_text", post(echo_text_search))).await;

    let results = client(&base)
        .search_text("woman in red jacket", 12)
        .await
        .expect("Search should succeed");

    assert_eq!(results.len(), 2);

    let first = &results[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.title, "Person 7 (clothes 2)");
    assert_eq!(first.image_url, format!("{base}/images/x.jpg"));
    assert!((first.score - 0.92).abs() < f64::EPSILON);

    let second = &results[1];
    assert_eq!(second.title, "Result 42");
    assert!(second.image_url.is_empty());
    assert!((second.score - 0.5).abs() < f64::EPSILON);
    assert!(second.metadata.is_none());
}

#[tokio::test]
async fn text_search_sends_the_documented_body() {
    let router = Router::new().route(
        "/search_text",
        post(|Json(body): Json<Value>| async move {
            let matches = body["text"] == "man with beard"
                && body["top_k"] == 30
                && body["dataset_names"].is_null();
            let results = if matches {
                json!([{"id": "ok", "score": 1.0}])
            } else {
                json!([])
            };
            Json(json!({ "results": results }))
        }),
    );
    let base = serve(router).await;

    let results = client(&base)
        .search_text("man with beard", 30)
        .await
        .expect("Search should succeed");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "ok");
}

#[tokio::test]
async fn error_detail_is_surfaced() {
    let router = Router::new().route(
        "/search_text",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "text must not be empty"})),
            )
        }),
    );
    let base = serve(router).await;

    let error = client(&base)
        .search_text("x", 10)
        .await
        .expect_err("Search should fail");

    assert_eq!(
        error,
        SearchError::Status {
            status: 400,
            detail: Some("text must not be empty".to_string()),
        }
    );
    assert_eq!(error.description(), "text must not be empty");
}

#[tokio::test]
async fn non_json_error_falls_back_to_status() {
    let router = Router::new().route(
        "/search_text",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
    );
    let base = serve(router).await;

    let error = client(&base)
        .search_text("x", 10)
        .await
        .expect_err("Search should fail");

    assert_eq!(
        error,
        SearchError::Status {
            status: 500,
            detail: None,
        }
    );
    assert_eq!(error.description(), "Request failed with status 500");
}

#[tokio::test]
async fn missing_results_field_is_an_empty_list() {
    let router = Router::new().route("/search_text", post(|| async { Json(json!({})) }));
    let base = serve(router).await;

    let results = client(&base)
        .search_text("anyone", 10)
        .await
        .expect("Search should succeed");

    assert!(results.is_empty());
}

#[tokio::test]
async fn image_search_uploads_a_file_field() {
    async fn search_image(
        Query(params): Query<HashMap<String, String>>,
        mut multipart: Multipart,
    ) -> Json<Value> {
        let mut received = None;
        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() == Some("file") {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field.bytes().await.unwrap_or_default();
                received = Some((file_name, content_type, bytes.len()));
            }
        }

        let Some((file_name, content_type, len)) = received else {
            return Json(json!({"results": []}));
        };
        Json(json!({
            "results": [{
                "id": file_name,
                "score": 0.75,
                "payload": {
                    "path": "C:\\frames\\cam 1.png",
                    "metadata": {
                        "top_k": params.get("top_k").cloned().unwrap_or_default(),
                        "content_type": content_type,
                        "size": len,
                    }
                }
            }]
        }))
    }

    let base = serve(Router::new().route("/search_image", post(search_image))).await;
    let upload = ImageUpload {
        file_name: "face.png".to_string(),
        mime: "image/png".to_string(),
        bytes: Arc::new(vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3]),
    };

    let results = client(&base)
        .search_image(&upload, 25)
        .await
        .expect("Search should succeed");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.id, "face.png");
    assert_eq!(result.title, "Result face.png");
    assert_eq!(result.image_url, format!("{base}/images/cam%201.png"));

    let metadata = result.metadata.as_ref().expect("Metadata should be kept");
    let extra: HashMap<_, _> = metadata
        .extra
        .iter()
        .map(|(key, value)| (key.as_str(), value.to_string()))
        .collect();
    assert_eq!(extra.get("top_k").map(String::as_str), Some("25"));
    assert_eq!(
        extra.get("content_type").map(String::as_str),
        Some("image/png")
    );
    assert_eq!(extra.get("size").map(String::as_str), Some("8"));
}

#[tokio::test]
async fn result_images_are_downloaded() {
    let router = Router::new().route(
        "/images/{name}",
        get(|| async { vec![1_u8, 2, 3, 4] }),
    );
    let base = serve(router).await;

    let bytes = client(&base)
        .fetch_image(&format!("{base}/images/x.jpg"))
        .await
        .expect("Download should succeed");

    assert_eq!(bytes, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn health_reflects_service_state() {
    let ready = serve(Router::new().route(
        "/health",
        get(|| async { Json(json!({"ok": true})) }),
    ))
    .await;
    client(&ready).health().await.expect("Service should be ready");

    let loading = serve(Router::new().route(
        "/health",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"detail": "Model is loading"})),
            )
        }),
    ))
    .await;
    let error = client(&loading)
        .health()
        .await
        .expect_err("Service should not be ready");
    assert_eq!(
        error,
        SearchError::Status {
            status: 503,
            detail: Some("Model is loading".to_string()),
        }
    );
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");
    drop(listener);

    let error = client(&format!("http://{addr}"))
        .search_text("anyone", 10)
        .await
        .expect_err("Search should fail");

    assert!(matches!(error, SearchError::Network(_)));
}

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.search.api_base_url = Some("http://search.local:8000".to_string());
    config.search.default_result_count = Some(120);
    config.results.thumbnail_cache_size = Some(64);

    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    assert_eq!(loaded, config);
    assert_eq!(loaded.default_result_count().value(), 120);
    assert_eq!(
        config::resolve_api_base_url(Some(" http://cli.local "), &loaded).as_deref(),
        Some("http://cli.local")
    );
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("search-button"), "Search");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}
