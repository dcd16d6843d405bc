use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Fault boundary for the handlers: anything that bubbles up through `?`
/// gets logged and answered with a plain 500.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!("Request failed due to: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong, please try again").into_response()
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
