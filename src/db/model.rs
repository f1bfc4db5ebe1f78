use serde::{Deserialize, Serialize};

/// One movie record as stored and as sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub actors: Vec<String>,
    #[serde(rename = "releaseYear")]
    pub release_year: Option<i64>,
}

/// The user-supplied fields of a movie, already coerced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFields {
    pub title: String,
    pub actors: Vec<String>,
    #[serde(rename = "releaseYear")]
    pub release_year: Option<i64>,
}

impl Movie {
    pub fn from_fields(id: String, fields: MovieFields) -> Self {
        Self {
            id,
            title: fields.title,
            actors: fields.actors,
            release_year: fields.release_year,
        }
    }

    /// Overwrite all user fields, keeping the id.
    pub fn replace_fields(&mut self, fields: &MovieFields) {
        self.title = fields.title.clone();
        self.actors = fields.actors.clone();
        self.release_year = fields.release_year;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Invalid actors list: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DbResult<T> = Result<T, DbError>;
