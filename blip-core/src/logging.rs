use crate::config::{LogFormat, LoggingConfig};
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system from the `[logging]` config section.
///
/// - `RUST_LOG` takes precedence over the configured level
/// - JSON output flattens event fields for cleaner log lines
/// - With `TOKIO_CONSOLE` set, the tokio-console subscriber is installed instead
pub fn init_logging(cfg: &LoggingConfig) {
    if std::env::var("TOKIO_CONSOLE").is_ok() {
        console_subscriber::init();
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    match cfg.format.unwrap_or_else(default_log_format) {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).init(),
    }
}

pub fn default_log_format() -> LogFormat {
    if io::stdout().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}
