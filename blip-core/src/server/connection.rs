use http::{Method, StatusCode};
use std::io;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::StaticFilesConfig;
use crate::http::{ParseError, Request, Response, parse_request};
use crate::static_files::handle_static_request;

#[derive(Debug, Error)]
pub enum ConnectionError {
    /// Nothing was written back to the client.
    #[error("connection abandoned: {0}")]
    Parse(#[from] ParseError),

    #[error("failed to write {status} response: {source}")]
    Write {
        status: StatusCode,
        #[source]
        source: io::Error,
    },
}

/// Serves exactly one request on `stream`, then shuts down the write side.
///
/// A request that fails to parse closes the connection without a response.
/// Otherwise the request is dispatched by method, answered, and the
/// connection is closed; it is never reused.
pub async fn handle_connection<S>(
    stream: S,
    static_files: &StaticFilesConfig,
) -> Result<StatusCode, ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut stream = BufReader::new(stream);

    let request = parse_request(&mut stream).await?;
    let response = dispatch(&request, static_files).await;

    tracing::debug!(
        method = %request.method,
        path = %request.path,
        user_agent = request.header("User-Agent").unwrap_or("-"),
        status = response.status.as_u16(),
        content_length = response.content_length,
        "response"
    );

    let status = response.status;
    response
        .write_to(&mut stream)
        .await
        .map_err(|source| ConnectionError::Write { status, source })?;

    // The peer may already be gone; the response has been flushed either way.
    let _ = stream.shutdown().await;

    Ok(status)
}

/// GET and HEAD go to the static file handler; every other method is a 405.
pub async fn dispatch(request: &Request, static_files: &StaticFilesConfig) -> Response {
    match request.method {
        Method::GET | Method::HEAD => handle_static_request(static_files, request).await,
        _ => Response::empty(StatusCode::METHOD_NOT_ALLOWED),
    }
}
