//! Listener binding and the serve loop.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router;
use crate::error::Result;

/// Bind the API listener on all interfaces.
pub async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    Ok(listener)
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before returning; the listener is
/// dropped on return.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();
    info!("Server is running on http://localhost:{}", port);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
