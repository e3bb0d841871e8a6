use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xevic_api::config::ServerConfig;
use xevic_api::router::build_app_router;
use xevic_api::state::AppState;
use xevic_pipeline::{Pipeline, PipelineConfig};

#[tokio::main]
async fn main() {
    // Local development only; deployments set real environment variables.
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "xevic_api=debug,xevic_pipeline=debug,xevic_events=debug,xevic_obfuscator=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let pipeline_config = PipelineConfig::from_env();
    tracing::info!(
        obfuscator_configured = pipeline_config.api_key.is_some(),
        webhook_configured = pipeline_config.webhook_url.is_some(),
        obfuscator_url = %pipeline_config.obfuscator_url,
        "Loaded pipeline configuration"
    );

    if Duration::from_secs(config.request_timeout_secs) <= pipeline_config.outbound_timeout {
        tracing::warn!(
            request_timeout_secs = config.request_timeout_secs,
            outbound_budget = ?pipeline_config.outbound_timeout,
            "Request timeout does not exceed the outbound budget; slow integrations will surface as 408"
        );
    }

    // --- App state ---
    let state = AppState {
        pipeline: Pipeline::new(Arc::new(pipeline_config)),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting xevic obfuscator web");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
