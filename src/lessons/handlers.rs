use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use tracing::{info, instrument, warn};

use crate::{
    errors::{AppError, AppResult},
    lessons::{
        dto::MessageResponse,
        params::{LessonId, UserId},
        repo, Lesson, LessonPayload,
    },
    state::AppState,
};

// `/api/lessons/:key` is shared: a user id for GET, a lesson id for PUT/DELETE.
pub fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/api/lessons", post(create_lesson))
        .route("/api/lessons/single/:id", get(get_lesson))
        .route(
            "/api/lessons/:key",
            get(list_lessons).put(update_lesson).delete(delete_lesson),
        )
}

#[instrument(skip(state))]
pub async fn list_lessons(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> AppResult<Json<Vec<Lesson>>> {
    let lessons = repo::list_by_user(&state.db, &user_id)
        .await
        .map_err(AppError::store("Error querying database"))?;
    Ok(Json(lessons))
}

#[instrument(skip(state))]
pub async fn get_lesson(
    State(state): State<AppState>,
    LessonId(id): LessonId,
) -> AppResult<Json<Lesson>> {
    match repo::find_by_id(&state.db, id)
        .await
        .map_err(AppError::store("Error querying database"))?
    {
        Some(lesson) => Ok(Json(lesson)),
        None => Err(AppError::NotFound("Lesson not found")),
    }
}

#[instrument(skip(state, body))]
pub async fn create_lesson(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Lesson>)> {
    let payload = LessonPayload::from_json(&body)?;
    let lesson = repo::insert(&state.db, &payload)
        .await
        .map_err(AppError::store("Error inserting data into database"))?;
    info!(lesson_id = lesson.id, user_id = %lesson.user_id, "lesson created");
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// Writes by id succeed whether or not the row exists; a miss is only logged.
#[instrument(skip(state, body))]
pub async fn update_lesson(
    State(state): State<AppState>,
    LessonId(id): LessonId,
    body: Bytes,
) -> AppResult<Json<Lesson>> {
    let payload = LessonPayload::from_json(&body)?;
    let affected = repo::update(&state.db, id, &payload)
        .await
        .map_err(AppError::store("Error updating data in the database"))?;
    if affected == 0 {
        warn!(lesson_id = id, "update matched no lesson");
    } else {
        info!(lesson_id = id, "lesson updated");
    }
    Ok(Json(payload.with_id(id)))
}

#[instrument(skip(state))]
pub async fn delete_lesson(
    State(state): State<AppState>,
    LessonId(id): LessonId,
) -> AppResult<Json<MessageResponse>> {
    let affected = repo::delete(&state.db, id)
        .await
        .map_err(AppError::store("Error deleting data from database"))?;
    if affected == 0 {
        warn!(lesson_id = id, "delete matched no lesson");
    } else {
        info!(lesson_id = id, "lesson deleted");
    }
    Ok(Json(MessageResponse {
        message: "Lesson deleted successfully",
    }))
}
