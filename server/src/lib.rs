//! In-memory todo HTTP API.
//!
//! # Overview
//! `TodoStore` holds the ordered todo list and the id counter and validates
//! every mutation. The axum router in `routes` is a thin layer over it: each
//! handler locks the shared store, runs one operation, and maps the result to
//! a status code and JSON body.
//!
//! # Design
//! - One `RwLock` guards list and counter together, so concurrent creates
//!   never share an id.
//! - Validation collects every failure and returns them in one 400 body.
//! - Nothing is persisted; a restart starts from an empty list at id 1.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod routes;
pub mod store;
pub mod validation;

use axum::{routing::get, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, StoreError};
pub use model::{Priority, PriorityInput, Todo, TodoCreateRequest, TodoId, TodoUpdateRequest};
pub use store::{SharedStore, TodoStore};
pub use validation::{ErrorCode, ErrorResponse, ValidationErrorResponse};

/// Startup and serve failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::new().shared())
}

/// Router over an existing store, for callers that need to inspect it.
pub fn app_with_store(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            get(routes::get_todo)
                .put(routes::replace_todo)
                .patch(routes::patch_todo)
                .delete(routes::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve until the listener fails. Used by tests that own their runtime.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;
    tracing::info!(addr = %config.addr, "listening");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
