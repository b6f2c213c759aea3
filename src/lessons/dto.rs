use serde::Serialize;
use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::lessons::repo_types::LessonPayload;

/// Acknowledgement body for writes that return no record.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl LessonPayload {
    /// Decode a request body into a typed payload.
    ///
    /// All four fields must be present with their JSON types; extra keys
    /// (a client-sent `id` included) are ignored.
    pub fn from_json(body: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(body).map_err(|e| {
            warn!(error = %e, "rejecting lesson payload");
            AppError::InvalidInput("Invalid request data")
        })
    }
}
