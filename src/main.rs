//! Social navbar - Main Entry Point
//!
//! Serves the Dioxus application; server functions resolve the session and
//! answer user searches. Uses dioxus::serve() pattern for dx serve compatibility.

use social_navbar::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting social navbar...");

    dioxus::serve(|| async move {
        // Load fixtures up front so configuration errors show at startup
        let state = social_navbar::infrastructure::server_state();
        tracing::info!(
            users = state.directory.len(),
            search_limit = state.config.search_limit,
            "Server state ready"
        );

        Ok(dioxus::server::router(App))
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Social navbar - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
