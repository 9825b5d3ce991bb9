//! Settings page endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, send_json, StubBackend};
use serde_json::json;

#[tokio::test]
async fn settings_start_at_defaults() {
    let (app, _) = build_test_app(StubBackend::new());

    let json = body_json(get(app, "/en/settings").await).await;

    let settings = &json["data"]["content"];
    assert_eq!(settings["company_name"], "AzStat Corp");
    assert_eq!(settings["timezone"], "utc");
    assert_eq!(settings["max_file_size_mb"], 10);
    assert_eq!(settings["validation_level"], "strict");
}

#[tokio::test]
async fn save_then_reset() {
    let (app, state) = build_test_app(StubBackend::new());
    let body = json!({
        "company_name": "Baku Audit",
        "timezone": "cet",
        "max_file_size_mb": 50,
        "validation_level": "relaxed",
    });

    let response = send_json(app.clone(), Method::PUT, "/en/settings", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["company_name"], "Baku Audit");
    assert_eq!(state.settings.read().await.max_file_size_mb, 50);

    let response = send_json(app.clone(), Method::POST, "/en/settings/reset", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/en/settings").await).await;
    assert_eq!(json["data"]["content"]["company_name"], "AzStat Corp");
}

#[tokio::test]
async fn out_of_range_settings_are_rejected() {
    let (app, state) = build_test_app(StubBackend::new());
    let body = json!({
        "company_name": "Baku Audit",
        "timezone": "utc",
        "max_file_size_mb": 500,
        "validation_level": "strict",
    });

    let response = send_json(app, Method::PUT, "/en/settings", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(state.settings.read().await.max_file_size_mb, 10);
}
