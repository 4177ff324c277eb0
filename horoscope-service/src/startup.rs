//! Application wiring: state, router and server lifecycle.

use crate::config::{DatabaseSettings, HoroscopeConfig};
use crate::handlers;
use crate::services::{MongoReadingStore, ReadingStore};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// `store` is `None` when no database is configured or the client could not
/// be created; handlers that need it answer 503 rather than empty results.
#[derive(Clone)]
pub struct AppState {
    pub config: HoroscopeConfig,
    pub store: Option<Arc<dyn ReadingStore>>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/horoscope", get(handlers::list_readings))
        .route("/api/horoscope/generate", post(handlers::generate_reading))
        .route("/test", get(handlers::diagnostics))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Creates the MongoDB-backed store if the environment describes one.
/// Never fails: problems are logged and surface through `/test` and `/ready`.
pub async fn connect_store(settings: &DatabaseSettings) -> Option<Arc<dyn ReadingStore>> {
    let Some((uri, database)) = settings.connection() else {
        tracing::warn!(
            url_set = settings.url.is_some(),
            name_set = settings.name.is_some(),
            "DATABASE_URL/DATABASE_NAME not set; readings will not be persisted"
        );
        return None;
    };

    let store = match MongoReadingStore::connect(uri, database).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Reading store unavailable: {}", e);
            return None;
        }
    };

    if let Err(e) = store.initialize_indexes().await {
        // Indexes only speed up queries; the store is still usable.
        tracing::warn!("Continuing without indexes: {}", e);
    }

    Some(Arc::new(store))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application, connecting to the configured database if any.
    pub async fn build(config: HoroscopeConfig) -> Result<Self, AppError> {
        let store = connect_store(&config.database).await;
        Self::build_with_store(config, store).await
    }

    /// Build the application around an already constructed store.
    pub async fn build_with_store(
        config: HoroscopeConfig,
        store: Option<Arc<dyn ReadingStore>>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port, which tests rely on.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            store = store.is_some(),
            "Horoscope service listening"
        );

        Ok(Self {
            port,
            listener,
            state: AppState { config, store },
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
