use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("K8s API error: {0}")]
    K8sApiError(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // A kube failure anywhere in the chain means the control plane call
        // itself went wrong; everything else is our fault.
        if err.chain().any(|cause| cause.is::<kube::Error>()) {
            AppError::K8sApiError(format!("{err:#}"))
        } else {
            AppError::InternalServerError(format!("{err:#}"))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::K8sApiError(_) => StatusCode::BAD_GATEWAY,
        };

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
