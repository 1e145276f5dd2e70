//! Listener lifecycle: bind, announce, serve.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::api::create_router;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::utils::shutdown_signal;

/// Bind the listening socket.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Startup line confirming the listener is up.
pub fn running_line(port: u16) -> String {
    format!("Vulnerable app running on port {port}")
}

/// Startup line flagging the app as a deliberately vulnerable fixture.
pub const WARNING_LINE: &str =
    "WARNING: This app contains known vulnerabilities for testing purposes only";

/// Print the startup lines to stdout.
///
/// Written directly rather than through `tracing` so the log filter never hides them.
pub fn announce(port: u16) {
    println!("{}", running_line(port));
    println!("{WARNING_LINE}");
    info!(port, "startup announced");
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Serve)?;

    debug!("HTTP server stopped");
    Ok(())
}

/// Bind to the configured address and serve until the process is signalled.
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.listen_addr();
    let listener = bind(addr).await?;
    let local = listener
        .local_addr()
        .map_err(|source| AppError::Bind { addr, source })?;
    debug!("HTTP server listening on {}", local);

    announce(local.port());

    serve(listener, shutdown_signal()).await
}
