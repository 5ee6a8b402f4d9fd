use anyhow::{Context, Result};
use tokio::runtime::Builder;

use crate::config::BlipConfig;
use crate::server::Server;
use crate::server::pid::PidFile;

/// Run the server with the given configuration. Only returns on startup failure.
pub fn run(config: BlipConfig) -> Result<()> {
    let addr = config.listen_addr()?;

    // Attempt to write pid file (best-effort)
    let pid_file = match &config.server.pid_file {
        Some(path) => match PidFile::create(path) {
            Ok(pid_file) => {
                tracing::info!(pid_file = %pid_file.path().display(), "pid file written");
                Some(pid_file)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to write pid file; continuing");
                None
            }
        },
        None => None,
    };

    // Ensure pid file cleanup on shutdown
    if let Some(pid_file) = pid_file.clone() {
        ctrlc::set_handler(move || {
            tracing::info!("shutdown requested, removing pid file");
            pid_file.remove();
            std::process::exit(0);
        })
        .context("failed to install Ctrl-C handler")?;
    }

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;

    let result = runtime.block_on(async {
        let server = Server::bind(addr, config.static_files.clone()).await?;

        tracing::info!(
            addr = %server.local_addr()?,
            root = %config.static_files.root.display(),
            "listening"
        );

        server.serve().await;
        Ok::<_, anyhow::Error>(())
    });

    if let Some(pid_file) = pid_file {
        pid_file.remove();
    }

    result
}
