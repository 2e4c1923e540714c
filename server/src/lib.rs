//! HTTP service for todo items.
//!
//! # Overview
//! Exposes list, get, create, update and delete over a single collection of
//! todos. Storage is pluggable through [`TodoStore`]: [`MemoryStore`] for
//! tests, [`DocumentStore`] (sled) for durable data.
//!
//! # Design
//! - Wiring is explicit: callers build a store and hand it to [`app`].
//! - Routes are thin; the rules live in [`TodoService`].

pub mod config;
pub mod error;
pub mod model;
mod routes;
pub mod service;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig, StorageBackend, StorageConfig};
pub use error::AppError;
pub use model::{Todo, TodoInput};
pub use service::TodoService;
pub use store::{DocumentStore, MemoryStore, StoreError, TodoStore};

pub fn app(store: Arc<dyn TodoStore>) -> Router {
    Router::new()
        .route("/", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/{id}",
            get(routes::get_todo)
                .put(routes::update_todo)
                .delete(routes::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(TodoService::new(store))
}

pub async fn run(listener: TcpListener, store: Arc<dyn TodoStore>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Like [`run`], but stops accepting connections once `shutdown` resolves and
/// waits for in-flight requests to finish.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<dyn TodoStore>,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}
