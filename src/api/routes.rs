use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::config::ServerConfig;
use crate::ui::HeroImage;

pub struct AppState {
    pub config: ServerConfig,
    pub hero: Option<HeroImage>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/run", post(handlers::run))
        .route("/health", get(handlers::health))
        .layer(cors);

    let mut router = Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .nest("/api", api_routes);

    if let Some(hero) = &state.hero {
        router = router.nest_service("/images", ServeDir::new(&hero.dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
