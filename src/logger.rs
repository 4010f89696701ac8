use std::time::Instant;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

}

/// One access-log line per request.
pub async fn log_request(request: Request, next: Next) -> Response {

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{:6} | {:20} | {} | {:>8.2?}",
        method.as_str(),
        path,
        response.status().as_u16(),
        started.elapsed()
    );

    response

}
