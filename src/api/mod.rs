mod auth;
mod content;
mod devices;
pub mod error;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout));

    let content_routes = Router::new()
        .route("/schedule", post(content::upsert_schedule))
        .route("/scheduled", get(content::list_scheduled));

    let device_routes = Router::new()
        .route("/peripherals", get(devices::list_devices))
        .route("/peripherals", post(devices::register_device));

    Router::new()
        .route("/health", get(health_check))
        .nest("/auth", auth_routes)
        .nest("/content", content_routes)
        .nest("/api", device_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
