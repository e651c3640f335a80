//! # Query API
//!
//! Thin HTTP layer over the epoch store, the feed and the core computations.
//!
//! | route                    | source       | response                                  |
//! |--------------------------|--------------|-------------------------------------------|
//! | `GET /epochs`            | epoch store  | list of cached records, `limit`/`offset`  |
//! | `GET /epochs/{epoch}`    | epoch store  | one record or 404                         |
//! | `GET /epochs/{epoch}/speed` | live feed | `{EPOCH, Speed}` or 404                   |
//! | `GET /now`               | live feed    | `{EPOCH, state_vector, Speed}` or 404     |
//!
//! Upstream failures answer 502, malformed data 500.
pub mod error;
mod handlers;
pub mod models;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, ReferenceClock};

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/epochs", get(handlers::list_epochs))
        .route("/epochs/{epoch}", get(handlers::get_epoch))
        .route("/epochs/{epoch}/speed", get(handlers::epoch_speed))
        .route("/now", get(handlers::now))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve the query API until the process stops.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "query API listening");
    axum::serve(listener, create_router(state)).await
}
