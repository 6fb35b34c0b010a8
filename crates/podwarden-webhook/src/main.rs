//! podwarden webhook server.
//!
//! - TLS admission endpoints: `/mutate`, `/validate`
//! - Decode-once pipeline: HTTP body -> AdmissionReview -> Decision
//! - Graceful drain on SIGINT/SIGTERM (readyz flips to 503 while in-flight
//!   reviews complete)

use std::net::SocketAddr;
use std::time::Duration;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use tracing_subscriber::{fmt, EnvFilter};

use podwarden_webhook::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "podwarden.yaml".to_string());
    let cfg = config::load(&cfg_path).expect("config load failed");

    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");
    let drain_grace = Duration::from_millis(cfg.server.drain_grace_ms);

    tracing::info!(
        %listen,
        cert = %cfg.server.tls_cert,
        key = %cfg.server.tls_key,
        "loading tls key pair"
    );
    let tls = RustlsConfig::from_pem_file(&cfg.server.tls_cert, &cfg.server.tls_key)
        .await
        .expect("failed to load tls key pair");

    let state = app_state::AppState::new(cfg).expect("state build failed");
    let app = router::build_router(state.clone());

    let handle = Handle::new();
    tokio::spawn(shutdown_on_signal(handle.clone(), state, drain_grace));

    tracing::info!(%listen, "podwarden-webhook starting");
    axum_server::bind_rustls(listen, tls)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .expect("server failed");

    tracing::info!("podwarden-webhook stopped");
}

async fn shutdown_on_signal(handle: Handle, state: app_state::AppState, grace: Duration) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    state.set_draining();
    tracing::info!("shutdown signal received, draining in-flight reviews");
    handle.graceful_shutdown(Some(grace));
}
