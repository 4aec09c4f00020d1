//! In-memory todo HTTP service.
//!
//! # Overview
//! Exposes create/list/get/update/delete over a single `Todo` resource held
//! in process memory. Nothing survives a restart.
//!
//! # Design
//! - `TodoStore` is injected through axum `State`; `app()` builds a fresh
//!   one, so every test gets an isolated store.
//! - Handlers return `Result<_, ApiError>`; the error type owns the mapping
//!   to status codes and `{"error": ...}` bodies.
//! - Any path that does not match, including a non-integer `{id}`, answers
//!   with the same JSON 404.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::ApiError;
pub use model::{CreateTodo, DeleteConfirmation, Todo, TodoPatch, Welcome};
pub use store::TodoStore;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(TodoStore::new())
}

/// Router over an existing store, for callers that want to inspect or seed it.
pub fn router(store: TodoStore) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve a fresh app on `listener` until the process is interrupted.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
