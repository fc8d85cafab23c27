//! Deadline Engine server
//!
//! Serves business-day and holiday queries over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --config ./config/cl
//! cargo run -- --config ./config/cl --bind 127.0.0.1:9000
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use deadline_engine::api::{AppState, create_router};
use deadline_engine::cli;
use deadline_engine::config::ConfigLoader;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = cli::parse_args();

    let config = ConfigLoader::load(&args.config)?;
    let bind_address = args
        .bind
        .clone()
        .unwrap_or_else(|| config.settings().bind_address.clone());

    let engine = config.holiday_engine();
    let warm = engine.load_holidays(true).await;
    match warm.holidays() {
        Some(holidays) => info!(
            calendar = %config.settings().name,
            holidays = holidays.len(),
            "Holiday cache warmed"
        ),
        None => warn!(
            path = %config.holidays_path().display(),
            "Starting without holidays; the next request retries the load"
        ),
    }

    let router = create_router(AppState::new(engine));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
