use anyhow::Context;
use tokio::signal;
use tracing::info;

use simple_inventory as inventory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = inventory::config::load_config().context("failed to load configuration")?;
    inventory::config::init_tracing(cfg.log_level(), cfg.log_json);

    if cfg.should_allow_permissive_cors() {
        info!("Using permissive CORS");
    } else {
        info!(origins = ?cfg.cors_allowed_origins, "Restricting CORS to configured origins");
    }

    let state = inventory::AppState::in_memory(cfg.clone());
    let app = inventory::app_router(state);

    let listener = tokio::net::TcpListener::bind((cfg.host.as_str(), cfg.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cfg.host, cfg.port))?;
    let addr = listener.local_addr()?;

    info!("🚀 simple-inventory listening on http://{}", addr);
    info!("   products API:  {}", cfg.api_prefix);
    if cfg.swagger_enabled() {
        info!("   swagger UI:    /swagger-ui");
    }
    if cfg.serve_client {
        info!("   client page:   / (from {})", cfg.client_dir);
    }

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped; in-memory products discarded");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install signal handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
