use core::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde_json::json;

#[derive(Debug, From)]
pub enum ServiceError {
    /// the blocking render task panicked or was cancelled
    #[from]
    Render(tokio::task::JoinError),
}

impl std::error::Error for ServiceError {}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::Render(ref error) => {
                tracing::error!(%error, "pdf render task failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RenderFailed",
                    "An internal error occurred",
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
