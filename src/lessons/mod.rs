mod dto;
pub mod handlers;
pub mod params;
pub mod repo;
pub mod repo_types;

pub use dto::MessageResponse;
pub use repo_types::{Lesson, LessonPayload};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::lesson_routes()
}
