use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use fitvision_gemini::api::GeminiApi;
use fitvision_gemini::config::GeminiConfig;
use fitvision_gemini::{GeminiGenerator, ImageGenerator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitvision_api::config::ServerConfig;
use fitvision_api::router::build_app_router;
use fitvision_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Image generator ---
    let gemini_config = GeminiConfig::from_env();
    let generator: Option<Arc<dyn ImageGenerator>> = match GeminiApi::from_config(&gemini_config)
    {
        Some(api) => {
            tracing::info!(model = %gemini_config.model, "Gemini generator configured");
            Some(Arc::new(GeminiGenerator::new(api)))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail");
            None
        }
    };

    // --- App state & router ---
    let addr = SocketAddr::new(
        config
            .host
            .parse::<IpAddr>()
            .context("HOST must be a valid IP address")?,
        config.port,
    );
    let state = AppState::new(config, generator);
    let app = build_app_router(state)?;

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Install the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "fitvision_api=debug,fitvision_gemini=debug,tower_http=debug".into()
    });

    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
