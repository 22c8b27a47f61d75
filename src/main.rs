//! CodeMaster · Coding Practice Playground Backend
//!
//! - Axum HTTP + WebSocket API
//! - Built-in JavaScript/Python problem catalog (extendable via TOML)
//! - Mock evaluation engine (heuristic, no real execution)
//! - File-backed progress store
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT                   : u16 (default 3000)
//!   PROGRESS_PATH          : progress record file (default ./data/codemaster_progress.json)
//!   PLAYGROUND_CONFIG_PATH : path to TOML config (extra problem bank)
//!   LOG_LEVEL              : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT             : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod catalog;
mod config;
mod progress;
mod evaluator;
mod playground;
mod session;
mod state;
mod protocol;
mod routes;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Build shared application state (catalog, progress store, evaluator).
  let state = AppState::new();

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state);

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "codemaster_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
