use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::MovieFields;
use crate::util::{parse_int, split_actors};

/// Body of a create request, and the movie part of an update request.
/// Fields are kept as raw JSON so any shape is accepted; `into_fields`
/// coerces them, it never rejects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieInput {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub actors: Option<Value>,
    #[serde(rename = "releaseYear", default)]
    pub release_year: Option<Value>,
}

impl MovieInput {
    pub fn into_fields(self) -> MovieFields {
        MovieFields {
            title: self.title.as_ref().map(coerce_text).unwrap_or_default(),
            actors: self.actors.as_ref().map(coerce_actors).unwrap_or_default(),
            release_year: self.release_year.as_ref().and_then(coerce_year),
        }
    }
}

/// Strings are taken as they are, null is empty, anything else becomes its
/// JSON text (`123` -> `"123"`).
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A list keeps its elements, each coerced to text. A string is split on
/// commas like the form field. Any other value is a single actor.
pub fn coerce_actors(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(coerce_text).collect(),
        Value::String(text) => split_actors(text),
        Value::Null => Vec::new(),
        other => vec![coerce_text(other)],
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMovieRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub movie: MovieInput,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteMovieRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Numbers are truncated toward zero, strings go through `parse_int`,
/// anything else has no year. Floats outside the `i64` range have no year.
pub fn coerce_year(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().and_then(truncate_float),
        },
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

fn truncate_float(f: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or beyond it overflows.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let t = f.trunc();
    if t.is_finite() && t > -LIMIT && t < LIMIT {
        Some(t as i64)
    } else {
        None
    }
}
