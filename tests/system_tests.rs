mod test_utils;

use reqwest::StatusCode;
use test_utils::*;

#[actix_rt::test]
async fn banner_lists_endpoints() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Ok");
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "/blog"));
}

#[actix_rt::test]
async fn health_reports_uptime_and_version() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime"].is_string());
    assert!(body["system"]["cpu_count"].as_u64().unwrap() >= 1);
}

#[actix_rt::test]
async fn unknown_routes_return_404() {
    let app = TestApp::spawn().await;

    let response = app.get("/nowhere").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
