//! Real-estate listing catalog: the listing model and, with the `server`
//! feature, the file-backed store and its JSON endpoints.

#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use axum::{routing::get, Router};

#[cfg(feature = "server")]
pub mod catalog;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod handlers;
pub mod models;

#[cfg(feature = "server")]
use catalog::Catalog;

#[cfg(feature = "server")]
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

#[cfg(feature = "server")]
impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[cfg(feature = "server")]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Hello, Real Estate Listings!" }))
        .route("/properties", get(handlers::list_properties))
        .route("/properties/:id", get(handlers::get_property))
        .fallback(handlers::fallback)
        .with_state(state)
}

/// Serves the catalog endpoints on an already-bound listener until the
/// process is stopped.
#[cfg(feature = "server")]
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state).into_make_service()).await
}
