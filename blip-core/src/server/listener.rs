use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::Instrument;

use crate::config::StaticFilesConfig;
use crate::server::connection::{ConnectionError, handle_connection};

/// Pause before retrying after a failed accept (e.g. out of file descriptors).
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// A bound listening socket plus the root it serves.
pub struct Server {
    listener: TcpListener,
    static_files: Arc<StaticFilesConfig>,
}

impl Server {
    pub async fn bind(addr: SocketAddr, static_files: StaticFilesConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        Ok(Self {
            listener,
            static_files: Arc::new(static_files),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop. Each connection runs on its own task; accept failures are
    /// logged and retried. Never returns.
    pub async fn serve(self) {
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            let static_files = self.static_files.clone();
            let span = tracing::debug_span!("connection", peer = %peer);
            tokio::spawn(
                async move {
                    match handle_connection(stream, &static_files).await {
                        Ok(_) => {}
                        Err(ConnectionError::Parse(e)) => {
                            tracing::debug!(error = %e, "connection abandoned");
                        }
                        Err(e @ ConnectionError::Write { .. }) => {
                            tracing::debug!(error = %e, "response write failed");
                        }
                    }
                }
                .instrument(span),
            );
        }
    }
}
