use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::db::SqliteRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<SqliteRepository>,
}

impl AppState {
    pub fn new(config: Config, db: Arc<SqliteRepository>) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route(
        "/api",
        get(crate::api::list_movies)
            .post(crate::api::create_movie)
            .put(crate::api::update_movie)
            .delete(crate::api::delete_movie),
    );

    let ui_routes = Router::new()
        .route(
            "/",
            get(crate::ui::pages::home).post(crate::ui::pages::submit_movie),
        )
        .route("/delete", post(crate::ui::pages::delete_movie))
        .route("/style.css", get(crate::ui::pages::stylesheet));

    let mut router = Router::new()
        .merge(api_routes)
        .merge(ui_routes)
        .fallback(crate::ui::pages::not_found);

    if let Some(ref appdir) = state.config.appdir {
        let files = ServeDir::new(appdir).not_found_service(crate::ui::pages::not_found.into_service());
        router = router.fallback_service(files);
    }

    let app = router
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Middleware added with Router::layer runs after routing, so the path
    // has to be rewritten by an outer router for it to affect matching.
    Router::new()
        .fallback_service(app)
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
}
