use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use timer_api::{build_router, AppState};
use timer_core::services::SessionService;
use timer_infrastructure::{create_pool, HttpSessionGateway, PgSessionRepository};
use timer_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry; the guard flushes file logs on exit
    let _log_guard = timer_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Session store
    let pool = create_pool(&config.database)?;
    let session_repo = Arc::new(PgSessionRepository::new(pool));

    // Upstream session service
    let session_gateway = match HttpSessionGateway::new(&config.upstream) {
        Ok(g) => Arc::new(g),
        Err(e) => {
            error!("Failed to configure session service client: {}", e);
            std::process::exit(1);
        }
    };
    info!("Session service at {}", config.upstream.base_url);

    // Create App State
    let state = AppState {
        session_service: Arc::new(SessionService::new(session_repo, session_gateway)),
        config: Arc::new(config.clone()),
    };

    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
