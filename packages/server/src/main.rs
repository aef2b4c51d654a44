use anyhow::Context;
use axum::ServiceExt;
use axum::extract::Request;
use tracing::{info, warn};

use holonet_server::config::AppConfig;
use holonet_server::database::init_db;
use holonet_server::seed::seed_catalog;
use holonet_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;

    let level = config
        .log
        .max_level()
        .context("Invalid log configuration")?;
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .init();

    let db = init_db(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.database.seed {
        let summary = seed_catalog(&db)
            .await
            .context("Failed to seed catalog")?;
        info!(?summary, "Catalog seeded");
    }

    let addr = config.bind_address();
    let app = holonet_server::build_app(AppState { db, config });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received");
}
