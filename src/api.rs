pub mod logs;
pub mod setup;
pub mod time_srv;

use crate::err::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures a handler reports back to the client.
///
/// Every variant becomes a plain-text 500 that carries the underlying error text.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Could not load timezone: {0}")]
    Timezone(Error),

    #[error("Database error: {0}")]
    Record(sqlx::Error),

    #[error("Failed to retrieve logs: {0}")]
    Retrieve(sqlx::Error),

    #[error("Failed to scan log: {0}")]
    Scan(sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
