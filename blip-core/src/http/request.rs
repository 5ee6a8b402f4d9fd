use http::Method;
use std::collections::HashMap;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Upper bound on the request line plus all header lines, terminators included.
pub const MAX_HEAD_SIZE: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("connection closed before a request line was received")]
    Eof,

    #[error("malformed request line {line:?}")]
    MalformedRequestLine { line: String },

    #[error("request head exceeds {limit} bytes")]
    HeadTooLarge { limit: usize },

    #[error("failed to read request: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed request line plus headers. The body, if any, is never read.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,

    /// Request-target exactly as sent by the client.
    pub path: String,

    /// Header names keep the case they were received in.
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Reads one request head from `reader`.
///
/// Consumes bytes up to and including the blank line that ends the header
/// block (or up to EOF). Blank lines before the request line are ignored.
/// Header lines without a colon are skipped. Reading stops with
/// [`ParseError::HeadTooLarge`] once [`MAX_HEAD_SIZE`] bytes have been
/// consumed without reaching the end of the head.
pub async fn parse_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut budget = MAX_HEAD_SIZE;

    let request_line = loop {
        if read_line(reader, &mut buf, &mut budget).await? == 0 {
            return Err(ParseError::Eof);
        }

        let line = trim_line_ending(&buf);
        if !line.is_empty() {
            break String::from_utf8_lossy(line).into_owned();
        }
    };

    let (method, path) = parse_request_line(&request_line)?;

    let mut headers = HashMap::new();
    loop {
        if read_line(reader, &mut buf, &mut budget).await? == 0 {
            break;
        }

        let line = trim_line_ending(&buf);
        if line.is_empty() {
            break;
        }

        let line = String::from_utf8_lossy(line);
        match line.split_once(':') {
            Some((name, value)) => {
                headers.insert(name.to_string(), value.trim().to_string());
            }
            None => {
                tracing::debug!(line = %line, "skipping header line without a colon");
            }
        }
    }

    Ok(Request {
        method,
        path,
        headers,
    })
}

/// Reads one line into `buf`, charging it against the remaining head budget.
async fn read_line<R>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    budget: &mut usize,
) -> Result<usize, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let n = (&mut *reader)
        .take(*budget as u64)
        .read_until(b'\n', buf)
        .await?;

    if n == *budget && buf.last() != Some(&b'\n') {
        return Err(ParseError::HeadTooLarge {
            limit: MAX_HEAD_SIZE,
        });
    }

    *budget -= n;
    Ok(n)
}

fn parse_request_line(line: &str) -> Result<(Method, String), ParseError> {
    let malformed = || ParseError::MalformedRequestLine {
        line: line.to_string(),
    };

    let mut parts = line.split_ascii_whitespace();
    let (Some(method), Some(path), Some(_version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let method = Method::from_bytes(method.as_bytes()).map_err(|_| malformed())?;

    Ok((method, path.to_string()))
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
