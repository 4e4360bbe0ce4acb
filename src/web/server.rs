use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::error::WebError;
use super::router::{build_router, WebState};

/// Owned listener plus the router it serves. Consumed by [`WebServer::serve`].
pub struct WebServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    router: Router,
    shutdown: CancellationToken,
}

/// Close switch for a running [`WebServer`]. Closing twice is a no-op.
#[derive(Debug, Clone)]
pub struct ServerHandle {
    shutdown: CancellationToken,
}

impl ServerHandle {
    pub fn close(&self) {
        if !self.shutdown.is_cancelled() {
            info!("[WebServer] Closing web server");
            self.shutdown.cancel();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl WebServer {
    pub async fn bind(port: u16, state: WebState) -> Result<Self, WebError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| WebError::Bind { port, source })?;
        let local_addr = listener.local_addr().map_err(|source| WebError::Bind { port, source })?;

        Ok(Self {
            listener,
            local_addr,
            router: build_router(state),
            shutdown: CancellationToken::new(),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Accepts connections until the handle is closed, then drains gracefully.
    pub async fn serve(self) -> Result<(), WebError> {
        info!("[WebServer] Starting web server on *: {}", self.local_addr.port());
        let shutdown = self.shutdown.clone();
        axum::serve(
            self.listener,
            self.router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(WebError::Serve)?;
        info!("[WebServer] Web server stopped");
        Ok(())
    }
}
