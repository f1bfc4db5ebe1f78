use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::error;

use super::types::*;
use crate::db::{DbError, Movie, MovieRepo};
use crate::server::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Update,
    Delete,
}

impl Operation {
    fn failure_text(self) -> &'static str {
        match self {
            Operation::Create => "Error adding movie",
            Operation::List => "Error fetching movies",
            Operation::Update => "Error updating movie",
            Operation::Delete => "Error deleting movie",
        }
    }

    fn not_found_text(self) -> &'static str {
        match self {
            Operation::Update => "Movie not found or no changes made",
            _ => "Movie not found",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Create => "adding movie",
            Operation::List => "fetching movies",
            Operation::Update => "updating movie",
            Operation::Delete => "deleting movie",
        };
        f.write_str(s)
    }
}

/// Failure of one API call. Everything except `NotFound` is a 500 with a
/// plain-text body; the cause is only logged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Error {0}: invalid request body: {1}")]
    Body(Operation, serde_json::Error),
    #[error("Error {0}: {1}")]
    Database(Operation, DbError),
    #[error("Error {0}: no matching record")]
    NotFound(Operation),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(op) => (StatusCode::NOT_FOUND, op.not_found_text()).into_response(),
            ApiError::Body(op, _) | ApiError::Database(op, _) => {
                error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, op.failure_text()).into_response()
            }
        }
    }
}

fn parse_body<T: DeserializeOwned>(op: Operation, body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Body(op, e))
}

pub async fn create_movie(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let op = Operation::Create;
    let input: MovieInput = parse_body(op, &body)?;
    let fields = input.into_fields();

    let movie = state
        .db
        .insert_movie(&fields)
        .await
        .map_err(|e| ApiError::Database(op, e))?;

    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state
        .db
        .list_movies()
        .await
        .map_err(|e| ApiError::Database(Operation::List, e))?;

    Ok(Json(movies))
}

pub async fn update_movie(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    let op = Operation::Update;
    let req: UpdateMovieRequest = parse_body(op, &body)?;

    // A request without an id cannot match any record.
    let id = req.id.ok_or(ApiError::NotFound(op))?;
    let fields = req.movie.into_fields();

    let modified = state
        .db
        .replace_movie(&id, &fields)
        .await
        .map_err(|e| ApiError::Database(op, e))?;

    if modified == 0 {
        return Err(ApiError::NotFound(op));
    }

    Ok((StatusCode::OK, "Movie updated"))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    let op = Operation::Delete;
    let req: DeleteMovieRequest = parse_body(op, &body)?;

    let id = req.id.ok_or(ApiError::NotFound(op))?;

    let deleted = state
        .db
        .delete_movie(&id)
        .await
        .map_err(|e| ApiError::Database(op, e))?;

    if deleted == 0 {
        return Err(ApiError::NotFound(op));
    }

    Ok((StatusCode::OK, "Movie deleted"))
}
