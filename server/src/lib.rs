//! HTTP API for the shopping list.
//!
//! # Overview
//! Four JSON endpoints under `/api/items` backed by an [`ItemStore`]. Each
//! request performs exactly one store call and holds no state of its own;
//! the store handle is injected through [`AppState`] at construction.
//!
//! # Design
//! - Unknown ids are not errors on the wire: update answers `null`, delete
//!   answers its usual confirmation.
//! - Store failures become a 500 with a generic `{"error": ...}` body; bad
//!   payloads become a 400.

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;

pub use config::{Config, StoreBackend};
pub use error::AppError;
pub use model::{DeleteConfirmation, ItemFields, ShoppingItem};
pub use store::{ItemStore, MemoryStore, MongoStore, StoreError};

use routes::{create_item, delete_item, list_items, update_item};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/{id}", put(update_item).delete(delete_item))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
