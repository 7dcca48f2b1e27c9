//! Liveness endpoint for hosts that expect the process to answer HTTP.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use std::net::SocketAddr;
use tracing::info;

pub const ALIVE: &str = "Bot alive!";

async fn alive() -> (StatusCode, &'static str) {
    (StatusCode::OK, ALIVE)
}

pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

/// Serves [`router`] on `0.0.0.0:port` until the process exits.
pub async fn serve(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(target = "health", %addr, "health endpoint listening");
    axum::serve(listener, router()).await
}
