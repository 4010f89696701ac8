mod models;
mod handlers;
mod client;
mod config;
mod error;
mod logger;

use axum::{middleware, routing::{get, Router}};
use std::sync::Arc;
use tokio::net::TcpListener;
use client::{BucketProvider, S3BucketProvider};
use config::Config;

// the provider is the only thing shared between handlers;
// it is immutable so an Arc is enough
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn BucketProvider>
}

pub fn router(state: AppState) -> Router {

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/s3/buckets", get(handlers::list_buckets))
        .layer(middleware::from_fn(logger::log_request))
        .with_state(state)

}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();
    logger::init();

    if let Err(e) = run().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }

}

async fn run() -> error::Result<()> {

    let config = Config::from_env()?;

    let provider = S3BucketProvider::from_env().await;
    let state = AppState { provider: Arc::new(provider) };

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())

}

async fn shutdown_signal() {

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => { signal.recv().await; }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received, draining connections");

}
