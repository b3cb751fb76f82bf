//! statusgate gateway binary.
//!
//! Usage: `statusgate-gateway [config.yaml]`
//! - config path: first argument, else `$STATUSGATE_CONFIG`, else `statusgate.yaml`
//!   (built-in defaults when that file is absent)
//! - log filter: `RUST_LOG`, default `info`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use statusgate_core::error::{Result, StatusGateError};
use statusgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "statusgate-gateway stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let (cfg, source) = config::load(std::env::args().nth(1))?;
    let state = app_state::AppState::new(cfg)?;

    let cfg = state.cfg();
    let listen = cfg.gateway.listen_addr()?;
    tracing::info!(?source, mcstatus = %cfg.upstream.mcstatus_base_url, "config loaded");

    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| StatusGateError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "statusgate-gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StatusGateError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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
    tracing::info!("signal received, starting graceful shutdown");
}
