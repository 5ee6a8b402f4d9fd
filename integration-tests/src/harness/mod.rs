mod config;
pub mod raw;
pub mod server;
pub mod tracing;

pub use config::{fixture_config, fixture_dir};
pub use server::TestServer;
pub use self::tracing::{CapturedEvent, init_test_tracing};
