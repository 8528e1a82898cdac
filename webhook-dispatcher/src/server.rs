use crate::{config::WebhookConfig, logic::Dispatcher, router};
use anyhow::{anyhow, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub struct AppState {
    pub config: WebhookConfig,
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(config: WebhookConfig, dispatcher: Dispatcher) -> Self {
        Self { config, dispatcher }
    }
}

#[derive(Clone)]
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    pub fn new(config: WebhookConfig) -> Self {
        Self::with_dispatcher(config, Dispatcher::default())
    }

    pub fn with_dispatcher(config: WebhookConfig, dispatcher: Dispatcher) -> Self {
        Self {
            state: Arc::new(AppState::new(config, dispatcher)),
        }
    }

    pub fn get_router(&self) -> Router {
        router::get_router(&self.state)
    }

    pub async fn run(&self) -> Result<()> {
        let tcp_listener = TcpListener::bind(&self.state.config.address)
            .await
            .map_err(|e| anyhow!("Failed to bind to address: {}", e))?;

        self.serve(tcp_listener).await
    }

    pub async fn serve(&self, tcp_listener: TcpListener) -> Result<()> {
        info!(
            "Webhook server listening on {}{}",
            tcp_listener.local_addr()?,
            self.state.config.webhook_path
        );

        axum::serve(tcp_listener, self.get_router().into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow!("Server error: {}", e))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
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
                tracing::error!("Failed to listen for SIGTERM: {e}");
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

    info!("Shutting down webhook server");
}
