use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use idraft::server::{router, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

const BODY_LIMIT: usize = 16 * 1024 * 1024;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn create_pdf_returns_attachment() {
    let app = router(&ServerConfig::default());

    let response = app
        .oneshot(post_json(
            "/create-pdf",
            json!({
                "content": "CHAPTER 1\nIt was a _dark_ and *stormy* night.\n\nREFERENCES\nSmith, 2020",
                "settings": { "font": "Times-Roman", "fontSize": 12, "lineSpacing": "1.5" }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=project.pdf"
    );

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    assert!(body.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn missing_content_and_settings_still_render() {
    let app = router(&ServerConfig::default());

    let response = app.oneshot(post_json("/create-pdf", json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    assert!(body.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn unsanitized_content_is_accepted() {
    let app = router(&ServerConfig::default());

    let response = app
        .oneshot(post_json(
            "/create-pdf",
            json!({ "content": "\u{201C}Quoted\u{201D} \u{2014} caf\u{e9} \u{1F600}" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = router(&ServerConfig::default());

    let request = Request::builder()
        .method("POST")
        .uri("/create-pdf")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn health_reports_ok() {
    let app = router(&ServerConfig::default());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value, json!({ "status": "ok" }));
}
