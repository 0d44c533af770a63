use std::fmt::Debug;
use std::future::Future;

/// Resolves on ctrl-c. New connections stop being accepted once this
/// returns; in-flight requests are allowed to finish.
pub async fn shutdown_signal() {
    wait_for(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires. If the signal source fails the server must
/// keep running, so this never resolves in that case.
pub async fn wait_for<F, E>(signal: F)
where
    F: Future<Output = Result<(), E>>,
    E: Debug,
{
    if let Err(e) = signal.await {
        tracing::error!(error = ?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down server gracefully...");
}
