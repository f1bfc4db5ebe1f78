use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::html::{button, escape, ButtonKind};
use crate::api::MovieInput;
use crate::db::{Movie, MovieFields};
use crate::util::{join_actors, split_actors};

/// Anchor of the form on the home page. Edit links point here so the
/// browser scrolls the form into view.
pub const FORM_ANCHOR: &str = "movie-form";

/// Contents of the add/edit form, as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub actors: String,
    #[serde(rename = "releaseYear", default)]
    pub release_year: String,
}

impl MovieForm {
    /// Pre-populate the form for editing an existing record.
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            actors: join_actors(&movie.actors),
            release_year: movie
                .release_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// What gets sent to the API: actors split into a list, the year left
    /// as typed for the server to coerce.
    pub fn submission(&self) -> MovieInput {
        MovieInput {
            title: Some(Value::String(self.title.clone())),
            actors: Some(Value::from(split_actors(&self.actors))),
            release_year: Some(Value::String(self.release_year.clone())),
        }
    }

    pub fn fields(&self) -> MovieFields {
        self.submission().into_fields()
    }

    /// Render the form. `editing` is the record being edited, if any; its
    /// id travels in a hidden field and switches the buttons to edit mode.
    pub fn render(&self, editing: Option<&Movie>) -> String {
        let mut html = format!(
            r#"<form id="{}" method="post" action="/" class="movie-form">
"#,
            FORM_ANCHOR
        );

        if let Some(movie) = editing {
            html.push_str(&format!(
                r#"<input type="hidden" name="id" value="{}">
"#,
                escape(&movie.id)
            ));
        }

        html.push_str(&format!(
            r#"<input type="text" name="title" placeholder="Title" value="{}" required>
<input type="text" name="actors" placeholder="Actors (comma separated)" value="{}" required>
<input type="number" name="releaseYear" placeholder="Release Year" value="{}" required>
"#,
            escape(&self.title),
            escape(&self.actors),
            escape(&self.release_year)
        ));

        let submit_text = if editing.is_some() {
            "Update Movie"
        } else {
            "Add Movie"
        };
        html.push_str(&button(ButtonKind::Submit, submit_text, "btn btn-primary"));
        html.push('\n');

        if editing.is_some() {
            html.push_str(&button(ButtonKind::Link("/"), "Cancel", "btn btn-danger"));
            html.push('\n');
        }

        html.push_str("</form>");
        html
    }
}

/// A posted form: the movie fields plus the id when editing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieFormData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub form: MovieForm,
}

impl MovieFormData {
    /// The id of the record being edited; blank means add mode.
    pub fn editing_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}
