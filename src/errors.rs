use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures a lesson request can end in.
///
/// Store failures carry a fixed, client-safe context string; the driver
/// error itself only goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn store(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| AppError::Store { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::InvalidInput(msg) | AppError::NotFound(msg) => *msg,
            AppError::Store { context, source } => {
                tracing::error!(error = %source, "{}", context);
                *context
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
