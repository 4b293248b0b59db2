use tokio::signal;
use tracing::info;

/// Shutdown signal future for graceful server termination.
///
/// Completes when the process receives SIGINT (Ctrl+C) or, on unix,
/// SIGTERM. Pass it to `axum::serve().with_graceful_shutdown()` so
/// in-flight requests are allowed to finish.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
