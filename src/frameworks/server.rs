// Framework bootstrap for the booking server runtime.

use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::frameworks::config;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, InMemoryDayStore, SystemClock};
use crate::use_cases::ledger::BookingLedger;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Default state: in-memory ledger storage, system clock, static catalog.
fn build_state() -> AppState {
    AppState {
        ledger: Arc::new(BookingLedger::new(Arc::new(InMemoryDayStore::new()))),
        rooms: Arc::new(config::room_catalog()),
        clock: Arc::new(SystemClock),
    }
}

// Serve the booking API on an already-bound listener with explicit state.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|error| {
        tracing::error!(%error, "server error");
    })
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    serve(listener, build_state()).await
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|error| {
            tracing::error!(%address, %error, "failed to bind");
        })?;

    run(listener).await
}
