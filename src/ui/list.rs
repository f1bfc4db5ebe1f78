use super::form::{MovieForm, FORM_ANCHOR};
use super::html::escape;
use crate::db::{Movie, MovieFields};
use crate::util::join_actors;

/// Local view of the catalog: the movies on screen and the record being
/// edited, if any. Updates are applied from server-confirmed results only;
/// nothing is rolled back when a request fails.
#[derive(Debug, Clone, Default)]
pub struct MovieList {
    movies: Vec<Movie>,
    editing: Option<Movie>,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn editing(&self) -> Option<&Movie> {
        self.editing.as_ref()
    }

    /// Switch to edit mode for `id`. Unknown ids leave the mode unchanged.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.movies.iter().find(|m| m.id == id) {
            Some(movie) => {
                self.editing = Some(movie.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The form as it should be shown in the current mode.
    pub fn form(&self) -> MovieForm {
        self.editing
            .as_ref()
            .map(MovieForm::from_movie)
            .unwrap_or_default()
    }

    pub fn apply_created(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Patch the record in place and leave edit mode.
    pub fn apply_updated(&mut self, id: &str, fields: &MovieFields) {
        if let Some(movie) = self.movies.iter_mut().find(|m| m.id == id) {
            movie.replace_fields(fields);
        }
        self.editing = None;
    }

    pub fn apply_deleted(&mut self, id: &str) {
        self.movies.retain(|m| m.id != id);
    }

    pub fn render(&self) -> String {
        let mut html = String::from(
            r#"<h2 class="list-title">Movies List</h2>
<ul class="movie-list">
"#,
        );
        for movie in &self.movies {
            let id = escape(&movie.id);
            let year = movie
                .release_year
                .map(|y| y.to_string())
                .unwrap_or_default();
            html.push_str(&format!(
                r#"<li class="movie">
<h3>{title}</h3>
<p>Actors: {actors}</p>
<p>Release Year: {year}</p>
<div class="movie-actions">
<a class="edit" href="/?edit={id}#{anchor}">Edit</a>
<form method="post" action="/delete">
<input type="hidden" name="id" value="{id}">
<button type="submit" class="delete">Delete</button>
</form>
</div>
</li>
"#,
                title = escape(&movie.title),
                actors = escape(&join_actors(&movie.actors)),
                year = year,
                id = id,
                anchor = FORM_ANCHOR,
            ));
        }
        html.push_str("</ul>");
        html
    }
}
