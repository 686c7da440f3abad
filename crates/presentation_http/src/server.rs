//! Serve loop with a bounded graceful shutdown

use std::{future::Future, io, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every open connection finished within the grace period
    Drained,
    /// Connections were still open when the grace period ran out
    TimedOut,
}

/// Serve `app` until `signal` resolves, then drain for at most `grace`
///
/// Connections still open after `grace` are dropped with the server task.
pub async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> io::Result<ShutdownOutcome>
where
    F: Future<Output = ()> + Send,
{
    let (drain_tx, drain_rx) = oneshot::channel::<()>();

    let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = drain_rx.await;
    });
    let mut server = tokio::spawn(async move { serve.await });

    tokio::select! {
        joined = &mut server => {
            joined.map_err(io::Error::other)??;
            return Ok(ShutdownOutcome::Drained);
        }
        () = signal => {}
    }

    info!("⏳ Waiting up to {:?} for connections to close...", grace);
    let _ = drain_tx.send(());

    if let Ok(joined) = tokio::time::timeout(grace, &mut server).await {
        joined.map_err(io::Error::other)??;
        Ok(ShutdownOutcome::Drained)
    } else {
        server.abort();
        warn!(
            "Shutdown grace period of {:?} elapsed, dropping open connections",
            grace
        );
        Ok(ShutdownOutcome::TimedOut)
    }
}
