//! API route definitions and router builder.

pub mod food;
pub mod health;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
///
/// CORS is fully permissive: any origin, any method, any header, no
/// credentials.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/get-food-name", get(food::get_food_name))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
