use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lesson record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Lesson {
    #[serde(rename = "userid")]
    #[sqlx(rename = "userid")]
    pub user_id: String, // owner, not unique
    pub id: i64,         // assigned by the store on insert
    pub name: String,
    pub description: String,
    pub point: i32,
}

/// Writable lesson fields; `id` always comes from the store or the path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonPayload {
    #[serde(rename = "userid")]
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub point: i32,
}

impl LessonPayload {
    pub fn with_id(self, id: i64) -> Lesson {
        Lesson {
            user_id: self.user_id,
            id,
            name: self.name,
            description: self.description,
            point: self.point,
        }
    }
}
