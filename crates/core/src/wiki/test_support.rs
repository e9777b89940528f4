//! In-process stand-in for the MediaWiki action API.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::MAX_RESULTS;

const RANKED_TITLES: [&str; 4] = ["Alpha Centauri", "Broken Page", "Gamma Ray", "Delta Scuti"];

async fn mock_api(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("list").map(String::as_str) == Some("search") {
        let limit: usize = params
            .get("srlimit")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0);
        if !(1..=MAX_RESULTS).contains(&limit) {
            return StatusCode::BAD_REQUEST.into_response();
        }
        return match params.get("srsearch").map(String::as_str) {
            Some("outage") => StatusCode::SERVICE_UNAVAILABLE.into_response(),
            Some("nothing") => Json(json!({ "batchcomplete": "" })).into_response(),
            Some("no hits") => Json(json!({ "query": {} })).into_response(),
            Some("garbled") => "not json".into_response(),
            _ => {
                let hits: Vec<_> = RANKED_TITLES
                    .iter()
                    .take(limit)
                    .map(|title| json!({ "title": title }))
                    .collect();
                Json(json!({ "query": { "search": hits } })).into_response()
            }
        };
    }

    let title = params.get("titles").cloned().unwrap_or_default();
    if params.get("explaintext").map(String::as_str) != Some("1") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    match title.as_str() {
        "Broken Page" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "Gamma Ray" => Json(json!({
            "query": { "pages": { "-1": { "title": "Gamma Ray", "missing": "" } } }
        }))
        .into_response(),
        "Slow Page" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({})).into_response()
        }
        "No Query" => Json(json!({ "batchcomplete": "" })).into_response(),
        _ => Json(json!({
            "query": {
                "pages": {
                    "42": { "title": title.clone(), "extract": format!("{} {}", title, "x".repeat(2000)) }
                }
            }
        }))
        .into_response(),
    }
}

/// Serve the mock on an ephemeral port and return its `api.php` URL
pub(crate) async fn spawn_mock() -> String {
    let app = Router::new().route("/w/api.php", get(mock_api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/w/api.php", addr)
}
