mod common;

use axum::{body::Body, http::Request};
use axum_test::TestServer;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint_success() {
    let upstream = common::spawn_upstream(common::Reply::Echo).await;
    let server = TestServer::new(common::create_test_app(upstream.share_url())).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_health_endpoint_with_upstream_down() {
    let share_url = common::unreachable_share_url().await;
    let server = TestServer::new(common::create_test_app(share_url)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[tokio::test]
async fn test_health_endpoint_oneshot() {
    let share_url = common::unreachable_share_url().await;
    let app = common::create_test_app(share_url);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain; charset=utf-8"
    );
}
