use crate::harness::{CapturedEvent, fixture_config, init_test_tracing};
use blip_core::config::StaticFilesConfig;
use blip_core::server::Server;
use reqwest::blocking::{Client, RequestBuilder};
use std::net::SocketAddr;
use std::sync::mpsc;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;
use std::time::Duration;

/// Handle to a running blip test server.
pub struct TestServer {
    addr: SocketAddr,
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Start a server rooted at a fixture directory.
    ///
    /// The listener binds to an ephemeral port, so tests can run in parallel.
    pub fn start(fixture: &str) -> Self {
        Self::start_with(fixture_config(fixture))
    }

    pub fn start_with(static_files: StaticFilesConfig) -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing(events());

        let (addr_tx, addr_rx) = mpsc::channel();

        // Run server on its own runtime in a background thread
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("failed to build test runtime");

            runtime.block_on(async move {
                let server = Server::bind("127.0.0.1:0".parse().unwrap(), static_files)
                    .await
                    .expect("failed to bind test server");
                addr_tx
                    .send(server.local_addr().expect("bound listener has an address"))
                    .expect("test harness went away");
                server.serve().await;
            });
        });

        let addr = addr_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("server failed to start");

        // The server closes every connection, so never pool them.
        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .pool_max_idle_per_host(0)
            .build()
            .expect("failed to build client");

        Self {
            addr,
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// Convenience helper for GET requests.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    /// Convenience helper for HEAD requests.
    pub fn head(&self, path: &str) -> RequestBuilder {
        self.client.head(self.url(path))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Snapshot of every event captured so far, across all test servers.
    pub fn events(&self) -> Vec<CapturedEvent> {
        events().lock().unwrap().clone()
    }
}

static EVENTS: OnceLock<Arc<Mutex<Vec<CapturedEvent>>>> = OnceLock::new();

fn events() -> Arc<Mutex<Vec<CapturedEvent>>> {
    EVENTS
        .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
        .clone()
}
