use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use ::api::error::{ApiError, ErrorKind, api_error};

pub mod api;
pub mod auth;
pub mod svc;

// adapted from https://github.com/tokio-rs/axum/blob/main/examples/anyhow-error-response/src/main.rs
//
// errors that carry an ApiError are reported to the client as-is, while anything
// else is logged and turned into a generic internal error
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match api_error(&self.0) {
            Some(err) => err.clone(),
            None => {
                error!({ error = %self.0 }, "internal error while handling request");
                ApiError::new(
                    ErrorKind::Internal,
                    format!("internal server error: {}", self.0),
                )
            }
        };

        let status =
            StatusCode::from_u16(body.kind.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
