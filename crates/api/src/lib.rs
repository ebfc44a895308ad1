//! Climate Observation API Server
//!
//! Read-only HTTP/JSON API over the station measurement dataset.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
mod error;
pub mod response;
mod routes;

pub use config::AppConfig;
pub use error::ApiError;

use storage::Repository;

/// Application state shared across handlers
pub struct AppState {
    /// Dataset query layer
    pub repository: Repository,
    /// Version string
    pub version: String,
}

impl AppState {
    /// Create new application state
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Create the application router.
///
/// The fixed `/api/v1.0/*` routes take precedence over the date catch-alls.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index::home))
        .route(
            "/api/v1.0/precipitation",
            get(routes::precipitation::get_precipitation),
        )
        .route("/api/v1.0/stations", get(routes::stations::get_stations))
        .route("/api/v1.0/tobs", get(routes::precipitation::get_last_year))
        .route("/api/v1.0/:start", get(routes::temperature::get_since))
        .route("/api/v1.0/:start/:end", get(routes::temperature::get_range))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        warn!("Tracing subscriber already installed");
    }
}

/// Open the dataset and serve until the listener fails
pub async fn run_server(config: &AppConfig) -> Result<(), ApiError> {
    let repository = Repository::with_sqlite(&config.database_path, config.max_connections).await?;
    let state = Arc::new(AppState::new(repository));
    info!("Climate API v{}", state.version);

    let app = create_router(state);

    info!("Starting API server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
