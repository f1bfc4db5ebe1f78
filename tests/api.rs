//! HTTP-level tests for the `/api` route, driving the router directly with
//! `tower::ServiceExt::oneshot`.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, body_text, test_app};
use serde_json::json;

const MISSING_ID: &str = "0123456789abcdef0123456789abcdef";

#[tokio::test]
async fn test_create_returns_201_with_id() {
    let app = test_app().await;
    let response = app
        .json(
            Method::POST,
            "/api",
            json!({"title": "Heat", "actors": ["Al Pacino", "Robert De Niro"], "releaseYear": 1995}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let movie = body_json(response).await;
    assert!(movie["_id"].is_string());
    assert_eq!(movie["title"], "Heat");
    assert_eq!(movie["actors"], json!(["Al Pacino", "Robert De Niro"]));
    assert_eq!(movie["releaseYear"], 1995);
}

#[tokio::test]
async fn test_create_coerces_release_year_and_actor_string() {
    let app = test_app().await;
    let response = app
        .json(
            Method::POST,
            "/api",
            json!({"title": "X", "actors": "A,B", "releaseYear": "1999"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let movie = body_json(response).await;
    assert_eq!(movie["releaseYear"], json!(1999));
    assert!(movie["releaseYear"].is_i64());
    assert_eq!(movie["actors"], json!(["A", "B"]));
}

#[tokio::test]
async fn test_create_with_unparseable_year_stores_null() {
    let app = test_app().await;
    let response = app
        .json(
            Method::POST,
            "/api",
            json!({"title": "X", "actors": ["A"], "releaseYear": "soon"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let movie = body_json(response).await;
    assert!(movie["releaseYear"].is_null());
}

#[tokio::test]
async fn test_create_coerces_non_string_title_and_actors() {
    let app = test_app().await;
    let response = app
        .json(
            Method::POST,
            "/api",
            json!({"title": 123, "actors": ["A"], "releaseYear": 1999}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let movie = body_json(response).await;
    assert_eq!(movie["title"], "123");

    let response = app
        .json(Method::POST, "/api", json!({"title": "X", "actors": ["A", 7]}))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let movie = body_json(response).await;
    assert_eq!(movie["actors"], json!(["A", "7"]));
    assert!(movie["releaseYear"].is_null());
}

#[tokio::test]
async fn test_create_with_malformed_body_returns_500() {
    let app = test_app().await;
    let response = app.raw(Method::POST, "/api", "{not json").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error adding movie");
}

#[tokio::test]
async fn test_list_empty_then_n_records() {
    let app = test_app().await;

    let response = app.get("/api").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    for title in ["One", "Two", "Three"] {
        let response = app
            .json(Method::POST, "/api", json!({"title": title, "actors": ["A"], "releaseYear": 2000}))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let movies = body_json(app.get("/api").await).await;
    let titles: Vec<&str> = movies
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
}

#[tokio::test]
async fn test_update_existing() {
    let app = test_app().await;
    let created = body_json(
        app.json(Method::POST, "/api", json!({"title": "Heat", "actors": ["Al Pacino"], "releaseYear": 1995}))
            .await,
    )
    .await;
    let id = created["_id"].as_str().unwrap();

    let response = app
        .json(
            Method::PUT,
            "/api",
            json!({"id": id, "title": "Heat", "actors": ["Al Pacino", "Val Kilmer"], "releaseYear": "1995"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Movie updated");

    let movies = body_json(app.get("/api").await).await;
    assert_eq!(movies[0]["_id"], id);
    assert_eq!(movies[0]["actors"], json!(["Al Pacino", "Val Kilmer"]));
}

#[tokio::test]
async fn test_update_without_changes_returns_404() {
    let app = test_app().await;
    let created = body_json(
        app.json(Method::POST, "/api", json!({"title": "Heat", "actors": ["Al Pacino"], "releaseYear": 1995}))
            .await,
    )
    .await;
    let id = created["_id"].as_str().unwrap();

    let response = app
        .json(
            Method::PUT,
            "/api",
            json!({"id": id, "title": "Heat", "actors": ["Al Pacino"], "releaseYear": 1995}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Movie not found or no changes made");
}

#[tokio::test]
async fn test_update_nonexistent_returns_404() {
    let app = test_app().await;
    let response = app
        .json(
            Method::PUT,
            "/api",
            json!({"id": MISSING_ID, "title": "X", "actors": ["A"], "releaseYear": 2000}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .json(Method::PUT, "/api", json!({"title": "X", "actors": ["A"], "releaseYear": 2000}))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_returns_500() {
    let app = test_app().await;

    let response = app
        .json(Method::PUT, "/api", json!({"id": "nope", "title": "X", "actors": [], "releaseYear": 1}))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error updating movie");

    let response = app.json(Method::DELETE, "/api", json!({"id": "nope"})).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error deleting movie");
}

#[tokio::test]
async fn test_delete_nonexistent_returns_404() {
    let app = test_app().await;
    let response = app.json(Method::DELETE, "/api", json!({"id": MISSING_ID})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Movie not found");
}

#[tokio::test]
async fn test_delete_then_list_shows_absent() {
    let app = test_app().await;
    let keep = body_json(
        app.json(Method::POST, "/api", json!({"title": "Keep", "actors": ["A"], "releaseYear": 2000}))
            .await,
    )
    .await;
    let gone = body_json(
        app.json(Method::POST, "/api", json!({"title": "Gone", "actors": ["B"], "releaseYear": 2001}))
            .await,
    )
    .await;

    let response = app
        .json(Method::DELETE, "/api", json!({"id": gone["_id"]}))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "Movie deleted");

    let movies = body_json(app.get("/api").await).await;
    assert_eq!(movies.as_array().unwrap().len(), 1);
    assert_eq!(movies[0]["_id"], keep["_id"]);

    let response = app
        .json(Method::DELETE, "/api", json!({"id": gone["_id"]}))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_path_is_normalized() {
    let app = test_app().await;
    let response = app.get("/api/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
