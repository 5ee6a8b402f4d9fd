use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::time::Duration;

/// Writes `request` verbatim, half-closes, and returns every byte the server
/// sent before closing the connection.
pub fn raw_exchange(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("failed to connect to test server");
    stream
        .set_read_timeout(Some(Duration::from_secs(2)))
        .expect("failed to set read timeout");

    stream.write_all(request).expect("failed to send request");
    stream
        .shutdown(Shutdown::Write)
        .expect("failed to half-close connection");

    let mut out = Vec::new();
    stream
        .read_to_end(&mut out)
        .expect("server did not close the connection");
    out
}

/// A response split into status line, headers (in wire order) and body.
#[derive(Debug)]
pub struct RawResponse {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn parse(raw: &[u8]) -> Self {
        let split = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response has no complete head");
        let head = std::str::from_utf8(&raw[..split]).expect("response head is not UTF-8");
        let mut lines = head.split("\r\n");

        let status_line = lines.next().unwrap_or_default().to_string();
        let headers = lines
            .map(|line| {
                let (name, value) = line.split_once(": ").expect("malformed header line");
                (name.to_string(), value.to_string())
            })
            .collect();

        Self {
            status_line,
            headers,
            body: raw[split + 4..].to_vec(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.iter().map(|(k, _)| k.as_str()).collect()
    }
}
