//! hostbeat server binary.
//!
//! One interchangeable instance of the info service: reads `PORT` and
//! `APP_NAME` from the environment, binds all interfaces, serves until
//! SIGINT/SIGTERM.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostbeat_core::host::HostProbe;
use hostbeat_server::{app_state::AppState, config, probe::SysinfoProbe, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = config::load_from_env();
    let listen = cfg.listen_addr();

    let probe: Arc<dyn HostProbe> = Arc::new(SysinfoProbe::new());
    tracing::info!(
        app = %cfg.app_name,
        hostname = %probe.hostname(),
        pid = std::process::id(),
        "hostbeat starting"
    );

    let state = AppState::new(cfg, probe);
    let app = router::build_router(state);

    tracing::info!(%listen, "listening");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
