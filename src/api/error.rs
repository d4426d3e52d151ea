use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use log::{error, warn};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid \"{field}\" date format. Expected ISO timestamp.")]
    InvalidDate { field: &'static str },

    #[error("\"from\" date must be before \"to\" date.")]
    InvalidRange,

    #[error("{kind} with slug {slug} not found")]
    NotFound { kind: &'static str, slug: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidDate { .. } | ApiError::InvalidRange => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("Rejected request: {}", self);
        }

        let body = Json(json!({
            "error": { "message": self.to_string() },
            "timestamp": Utc::now().to_rfc3339(),
        }));
        (status, body).into_response()
    }
}
