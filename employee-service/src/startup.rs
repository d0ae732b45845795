//! Application startup and lifecycle management.

use crate::config::EmployeeConfig;
use crate::services::{EmployeeDb, EmployeeStore};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Connect to MongoDB and bind the HTTP listener.
    pub async fn build(config: EmployeeConfig) -> Result<Self, AppError> {
        let db = EmployeeDb::connect(
            &config.mongodb.uri,
            &config.mongodb.database,
            &config.mongodb.collection,
        )
        .await?;

        Self::build_with_store(config.common.port, Arc::new(db)).await
    }

    /// Bind the HTTP listener (port 0 = random port for testing) in front of
    /// an already constructed store.
    pub async fn build_with_store(
        port: u16,
        store: Arc<dyn EmployeeStore>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Employee service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(store),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve requests until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
