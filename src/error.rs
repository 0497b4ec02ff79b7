use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors surfaced to API clients. Every variant carries the already-localized
/// message text; `Internal` additionally keeps the server-side detail, which is
/// logged and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    UnsupportedType(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{message}")]
    Internal {
        message: String,
        detail: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(message: &str, detail: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            message: message.to_string(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(m)
            | ApiError::Conflict(m)
            | ApiError::InvalidCredentials(m)
            | ApiError::UnsupportedType(m)
            | ApiError::PayloadTooLarge(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Auth(m) => (StatusCode::UNAUTHORIZED, m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            ApiError::Internal { message, detail } => {
                error!(error = %detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn validation_maps_to_400() {
        let resp = ApiError::Validation("bad".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflict_maps_to_400() {
        // The original API reports duplicate registration as a plain 400.
        let resp = ApiError::Conflict("taken".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_maps_to_401_and_not_found_to_404() {
        assert_eq!(
            ApiError::Auth("no".into()).into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn internal_hides_detail() {
        let resp = ApiError::internal("generic", anyhow::anyhow!("secret db path"))
            .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
