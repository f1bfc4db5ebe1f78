use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::error;

use super::form::MovieFormData;
use super::layout::layout;
use super::list::MovieList;
use crate::db::MovieRepo;
use crate::server::AppState;

const STYLESHEET: &str = include_str!("style.css");

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub edit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteFormData {
    #[serde(default)]
    pub id: String,
}

pub fn home_page(list: &MovieList) -> String {
    let form = list.form().render(list.editing());
    format!(
        r#"<div class="page">
<header><h1 class="page-title">Movie Database</h1></header>
{}
{}
</div>"#,
        form,
        list.render()
    )
}

pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Html<String> {
    let mut list = MovieList::new();
    match state.db.list_movies().await {
        Ok(movies) => list.load(movies),
        Err(e) => error!("Error fetching movies: {}", e),
    }

    if let Some(ref id) = query.edit {
        list.begin_edit(id);
    }

    Html(layout("Movie Database", &home_page(&list)))
}

/// Form post from the home page: update when the form carries an id,
/// create otherwise. Failures are logged and the user lands back on the
/// list either way.
pub async fn submit_movie(State(state): State<AppState>, Form(data): Form<MovieFormData>) -> Redirect {
    let fields = data.form.fields();

    match data.editing_id() {
        Some(id) => match state.db.replace_movie(id, &fields).await {
            Ok(0) => error!("Failed to update movie {}: not found or no changes made", id),
            Ok(_) => {}
            Err(e) => error!("Failed to update movie {}: {}", id, e),
        },
        None => {
            if let Err(e) = state.db.insert_movie(&fields).await {
                error!("Failed to add movie: {}", e);
            }
        }
    }

    Redirect::to("/")
}

pub async fn delete_movie(State(state): State<AppState>, Form(data): Form<DeleteFormData>) -> Redirect {
    match state.db.delete_movie(&data.id).await {
        Ok(0) => error!("Failed to delete movie {}: not found", data.id),
        Ok(_) => {}
        Err(e) => error!("Failed to delete movie {}: {}", data.id, e),
    }

    Redirect::to("/")
}

pub fn not_found_page() -> String {
    layout(
        "Page Not Found",
        r#"<div class="page">
<h1 class="page-title">404 - Page Not Found</h1>
<p>The page you are looking for does not exist.</p>
<p><a href="/">Back to the movie list</a></p>
</div>"#,
    )
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(not_found_page())).into_response()
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
