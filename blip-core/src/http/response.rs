use crate::http::content_type_for;
use bytes::{Bytes, BytesMut};
use http::StatusCode;
use httpdate::fmt_http_date;
use std::fmt::Write as _;
use std::io;
use std::time::SystemTime;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub const HTTP_VERSION: &str = "HTTP/1.1";

#[derive(Debug)]
pub enum Body {
    /// Error responses and HEAD requests.
    Empty,
    Bytes(Bytes),
}

/// Status line, the fixed header set and an optional body.
///
/// `content_length` equals the body length for GET responses. HEAD responses
/// carry the length a GET would have produced with an empty body.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub content_length: u64,
    pub body: Body,
}

impl Response {
    /// A response with `Content-Length: 0` and no body.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            content_type: content_type_for(""),
            content_length: 0,
            body: Body::Empty,
        }
    }

    /// 200 response carrying the full contents of `filename`.
    pub fn file(filename: &str, contents: Bytes) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: content_type_for(filename),
            content_length: contents.len() as u64,
            body: Body::Bytes(contents),
        }
    }

    /// 200 response announcing `len` bytes of `filename` without sending them.
    pub fn file_head(filename: &str, len: u64) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: content_type_for(filename),
            content_length: len,
            body: Body::Empty,
        }
    }

    /// Serializes the status line and headers, including the terminating blank line.
    pub fn head(&self, date: SystemTime) -> BytesMut {
        let mut head = BytesMut::with_capacity(128);

        // Writing into BytesMut cannot fail.
        let _ = write!(
            head,
            "{HTTP_VERSION} {}\r\n\
             Content-Type: {}\r\n\
             Content-Length: {}\r\n\
             Date: {}\r\n\
             \r\n",
            status_line(self.status),
            self.content_type,
            self.content_length,
            fmt_http_date(date),
        );

        head
    }

    /// Writes the head stamped with the current time, then the body.
    pub async fn write_to<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        writer.write_all(&self.head(SystemTime::now())).await?;

        if let Body::Bytes(bytes) = &self.body {
            writer.write_all(bytes).await?;
        }

        writer.flush().await
    }
}

/// Renders e.g. "404 Not Found".
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_str(), reason),
        None => status.as_str().to_string(),
    }
}
