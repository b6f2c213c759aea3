use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::warn;

use crate::errors::{AppError, AppResult};

/// Parse a lesson id taken from the path.
///
/// Any strictly positive `i64` is an id; anything else is rejected before a
/// query is built. Ids beyond the column's range simply match no row.
pub fn parse_lesson_id(raw: &str) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            warn!(raw_id = %raw, "rejecting lesson id");
            Err(AppError::InvalidInput("Invalid lesson ID"))
        }
    }
}

/// Lesson id from the single path segment, validated by [`parse_lesson_id`].
#[derive(Debug, Clone, Copy)]
pub struct LessonId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for LessonId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                warn!(error = %e, "undecodable lesson id");
                AppError::InvalidInput("Invalid lesson ID")
            })?;
        parse_lesson_id(&raw).map(LessonId)
    }
}

/// Owner id from the path, taken verbatim.
#[derive(Debug, Clone)]
pub struct UserId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                warn!(error = %e, "undecodable user id");
                AppError::InvalidInput("Invalid user ID")
            })?;
        Ok(UserId(raw))
    }
}
