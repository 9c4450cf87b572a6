//! Standalone API server (without Dioxus frontend)
//! Use this for API-only testing or backend development.
//!
//! Run with: cargo run --bin server --features server -- --port 3003 --directory fixtures/users.json

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use social_navbar::config::AppConfig;
use social_navbar::handlers::api_router;
use social_navbar::infrastructure::ServerState;

#[derive(Debug, Parser)]
#[command(name = "server", about = "JSON API for the social navbar")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3003)]
    port: u16,

    /// JSON array of users served by the search endpoint
    #[arg(long)]
    directory: Option<PathBuf>,

    /// JSON object describing the signed-in user
    #[arg(long)]
    session: Option<PathBuf>,

    /// Maximum number of users per search
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    // Flags override the NAVBAR_* environment
    let env_config = AppConfig::from_env().context("invalid NAVBAR_* environment")?;
    let mut builder = AppConfig::builder()
        .search_limit(args.limit.unwrap_or(env_config.search_limit))
        .sign_in_url(env_config.sign_in_url)
        .sign_out_url(env_config.sign_out_url);
    if let Some(path) = args.directory.or(env_config.directory_file) {
        builder = builder.directory_file(path);
    }
    if let Some(path) = args.session.or(env_config.session_file) {
        builder = builder.session_file(path);
    }
    let config = builder.build().context("invalid configuration")?;

    let state = ServerState::from_config(config).context("failed to load fixtures")?;
    tracing::info!(
        users = state.directory.len(),
        "Starting social navbar API server (standalone)..."
    );

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
