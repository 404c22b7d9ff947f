//! MyMaps Preview - crawler-facing Open Graph gateway.
//!
//! Serves preview documents to link-preview crawlers and relays all other
//! traffic to the upstream site.

use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mymaps_preview::{AppState, Config, Upstream, router};

/// MyMaps Preview - social link preview gateway.
#[derive(Parser, Debug)]
#[command(name = "mymaps-preview")]
#[command(about = "Open Graph preview gateway for MyMaps", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let bind_addr = config.bind_addr.clone();

    // Create the pass-through origin and the preview state
    let upstream = Upstream::new(&config)?;
    let state = AppState::new(config)?;

    // Build router with middleware
    let app = router(state, upstream).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting preview gateway");

    axum::serve(listener, app).await?;

    Ok(())
}
