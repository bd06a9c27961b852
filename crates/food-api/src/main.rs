//! Food API — minimal food record lookup server.
//!
//! Serves a liveness check at `/` and the contents of a local JSON food
//! record file at `/get-food-name`.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use food_api::config::ApiConfig;
use food_api::routes;
use food_api::state::AppState;
use food_api::store::FoodStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env();

    // RUST_LOG wins; otherwise the debug flag picks the default filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if config.debug { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "food-api starting");

    let store = FoodStore::new(&config.food_data_path);
    tracing::info!(path = %store.path().display(), "serving food record from file");

    let state = AppState::new(config.clone(), store);
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
