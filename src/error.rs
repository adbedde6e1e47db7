use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("movie not found")]
    MovieNotFound,

    #[error("Invalid movie id: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MovieNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidId(id) => {
                tracing::debug!(id = %id, "Rejected malformed movie id");
                (StatusCode::BAD_REQUEST, "invalid movie id".to_string())
            }
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Store(_) | AppError::Internal(_) => {
                // Callers only ever see a generic failure; the cause stays in the logs
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "err": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_shape() {
        let (status, body) = body_of(AppError::MovieNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "err": "movie not found" }));
    }

    #[tokio::test]
    async fn test_invalid_id_is_client_error() {
        let (status, body) = body_of(AppError::InvalidId("xyz".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["err"], "invalid movie id");
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let (status, body) = body_of(AppError::Internal("socket closed".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["err"], "internal server error");
    }
}
