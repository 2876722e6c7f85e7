use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use classifier::ClassifierError;
use serde::Serialize;

/// Error envelope returned to the caller.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Request-boundary error. Every failure maps to a status code and a
/// short message; the process keeps serving subsequent requests.
pub enum ApiError {
    /// The pipeline rejected or failed the request.
    Classify(ClassifierError),
    /// The upload itself was malformed (bad multipart, missing field).
    BadRequest(String),
    /// Worker-side failure outside the pipeline.
    Internal(String),
}

impl From<ClassifierError> for ApiError {
    fn from(err: ClassifierError) -> Self {
        Self::Classify(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            // The upload is at fault
            ApiError::Classify(ClassifierError::InvalidImage(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Load/shape/execution failures are deployment problems
            ApiError::Classify(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Classify(err) => err.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %message, "Request rejected");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
