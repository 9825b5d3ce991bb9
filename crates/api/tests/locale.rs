//! Locale redirect middleware and locale-prefixed page routing.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, build_test_app, get, StubBackend};

async fn redirect_target(uri: &str) -> String {
    let (app, _) = build_test_app(StubBackend::seeded());
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
    response.headers()[LOCATION].to_str().unwrap().to_string()
}

#[tokio::test]
async fn root_redirects_to_default_locale() {
    assert_eq!(redirect_target("/").await, "/en");
}

#[tokio::test]
async fn unprefixed_page_keeps_path_and_query() {
    assert_eq!(redirect_target("/statistics").await, "/en/statistics");
    assert_eq!(
        redirect_target("/compare?a=1&b=2").await,
        "/en/compare?a=1&b=2"
    );
}

#[tokio::test]
async fn lookalike_segment_is_not_a_locale() {
    assert_eq!(redirect_target("/english").await, "/en/english");
    assert_eq!(redirect_target("/fr/statistics").await, "/en/fr/statistics");
}

#[tokio::test]
async fn redirected_unknown_locale_ends_in_404() {
    let (app, _) = build_test_app(StubBackend::seeded());
    let response = get(app, "/en/fr/statistics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn excluded_paths_are_not_redirected() {
    let (app, _) = build_test_app(StubBackend::seeded());

    let response = get(app.clone(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    for path in ["/api/reports", "/favicon.ico", "/logo.png", "/_next/static/app.js"] {
        let response = get(app.clone(), path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn prefixed_pages_render_in_their_locale() {
    let (app, _) = build_test_app(StubBackend::seeded());

    for uri in ["/az", "/az/"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["data"]["locale"], "az");
        assert_eq!(json["data"]["nav"]["entries"][0]["href"], "/az");
        assert_eq!(json["data"]["nav"]["entries"][0]["active"], true);
    }

    let response = get(app, "/en/statistics").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["locale"], "en");
    assert_eq!(json["data"]["nav"]["entries"][1]["href"], "/en/statistics");
    assert_eq!(json["data"]["nav"]["entries"][1]["active"], true);
    assert_eq!(json["data"]["nav"]["settings"]["href"], "/en/settings");
}
