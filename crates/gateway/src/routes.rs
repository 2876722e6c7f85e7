use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use classifier::{ClassifierBackend, Disposition, Prediction};
use serde::Serialize;
use tower_http::cors::CorsLayer;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Wire form of a prediction.
#[derive(Serialize)]
pub struct ClassifyResponse {
    pub label: String,
    pub confidence: f32,
    pub disposition: Disposition,
}

impl From<Prediction> for ClassifyResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            label: prediction.label,
            // two-decimal display precision
            confidence: (prediction.confidence * 100.0).round() / 100.0,
            disposition: prediction.disposition,
        }
    }
}

pub fn app<B>(state: AppState<B>) -> Router
where
    B: ClassifierBackend + Send + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route("/classify", post(classify::<B>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

async fn classify<B>(
    State(state): State<AppState<B>>,
    mut multipart: Multipart,
) -> Result<Json<ClassifyResponse>, ApiError>
where
    B: ClassifierBackend + Send + 'static,
{
    let bytes = read_image_field(&mut multipart).await?;

    // The forward pass is CPU-bound; keep it off the async runtime
    let prediction = tokio::task::spawn_blocking(move || {
        let mut classifier = state
            .classifier
            .lock()
            .map_err(|_| ApiError::Internal("classifier lock poisoned".to_string()))?;
        classifier.classify(&bytes).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("classification task failed: {e}")))??;

    Ok(Json(prediction.into()))
}

async fn read_image_field(multipart: &mut Multipart) -> Result<Vec<u8>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("failed to read upload: {e}")))?;
            return Ok(bytes.to_vec());
        }
    }

    Err(ApiError::BadRequest(
        "missing `image` multipart field".to_string(),
    ))
}
