use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hue_engine::EngineError;
use serde_json::json;
use thiserror::Error;

use crate::services::ImageError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ImageError> for ApiError {
    fn from(e: ImageError) -> Self {
        match e {
            ImageError::Engine(e) => ApiError::Engine(e),
            other => ApiError::InvalidImage(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::Engine(e) => match e {
                EngineError::EmptyImage | EngineError::InvalidDimensions { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                EngineError::EmptyPalette | EngineError::Resize(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                EngineError::ParseColor(_)
                | EngineError::ChannelOutOfRange { .. }
                | EngineError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
