//! Application startup and lifecycle management.

use crate::config::TodoConfig;
use crate::handlers;
use crate::services::{CacheClient, Database};
use axum::{Router, middleware, routing::get};
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state. Connection handles are constructed once at
/// startup and injected into the router.
#[derive(Clone)]
pub struct AppState {
    pub config: TodoConfig,
    pub db: Arc<Database>,
    pub cache: CacheClient,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: TodoConfig) -> Result<Self, AppError> {
        let db = Database::new(
            &config.database.url,
            config.database.max_connections,
            config.database.min_connections,
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create PostgreSQL pool");
            e
        })?;
        let db = Arc::new(db);

        // Held but never invoked by any handler.
        let cache = CacheClient::new(&config.redis)?;

        let state = AppState {
            config: config.clone(),
            db,
            cache,
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Todo service listener bound");

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = Router::new()
            .route("/health", get(handlers::health_check))
            .route(
                "/todos",
                get(handlers::list_todos).post(handlers::create_todo),
            )
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware))
            .with_state(self.state);

        tracing::info!(
            service = "todo-service",
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        axum::serve(self.listener, router).await
    }
}
