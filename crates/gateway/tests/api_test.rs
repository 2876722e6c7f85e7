use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use classifier::Classifier;
use classifier::backend::mock::MockBackend;
use gateway::routes::app;
use gateway::state::AppState;
use http_body_util::BodyExt;
use image::{DynamicImage, Rgb, RgbImage};
use std::io::Cursor;
use tower::ServiceExt;

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

fn test_app(scores: Vec<f32>) -> Router {
    let classifier = Classifier::from_parts(
        MockBackend::with_scores(scores),
        vec!["Recyclable".to_string(), "Non-Recyclable".to_string()],
    )
    .unwrap();
    app(AppState::new(classifier))
}

fn png_bytes(image: RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

/// Build a multipart/form-data body with a single file field
fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn classify_request(field: &str, content: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/classify")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, "upload.png", content)))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_responds_ok() {
    let app = test_app(vec![0.9, 0.1]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_upload_returns_prediction_json() {
    let app = test_app(vec![0.9, 0.1]);
    let image = png_bytes(RgbImage::from_pixel(224, 224, Rgb([255, 255, 255])));

    let response = app.oneshot(classify_request("image", &image)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["label"], "Recyclable");
    assert_eq!(json["confidence"], 90.0);
    assert_eq!(json["disposition"], "recyclable");
}

#[tokio::test]
async fn test_losing_class_framed_as_non_recyclable() {
    let app = test_app(vec![0.25, 0.75]);
    let image = png_bytes(RgbImage::from_pixel(100, 60, Rgb([40, 40, 40])));

    let response = app.oneshot(classify_request("image", &image)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["label"], "Non-Recyclable");
    assert_eq!(json["confidence"], 75.0);
    assert_eq!(json["disposition"], "non_recyclable");
}

#[tokio::test]
async fn test_non_image_upload_is_rejected() {
    let app = test_app(vec![0.9, 0.1]);

    let response = app
        .oneshot(classify_request("image", b"just some text, not pixels"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = response_json(response).await;
    assert!(
        json["error"].as_str().unwrap().contains("image"),
        "Error message should say the upload was not an image: {json}"
    );
}

#[tokio::test]
async fn test_missing_image_field_is_bad_request() {
    let app = test_app(vec![0.9, 0.1]);
    let image = png_bytes(RgbImage::from_pixel(32, 32, Rgb([0, 0, 0])));

    let response = app
        .oneshot(classify_request("attachment", &image))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
