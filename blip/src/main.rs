use blip_core::cli::config::ConfigCmd;
use blip_core::config::{BlipConfig, LoggingConfig};
use blip_core::logging::init_logging;
use blip_core::server;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "blip", version, about = "Blip: a tiny static file server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Config file tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },

    /// Serve a directory (default)
    Run {
        /// Path to a blip config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Address to listen on, e.g. 127.0.0.1:8080
        #[arg(long)]
        listen: Option<String>,

        /// Directory to serve
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { cmd }) => {
            init_logging(&LoggingConfig::default());

            if let Err(e) = blip_core::cli::config::run(cmd) {
                eprintln!("config error: {e:#}");
                std::process::exit(1);
            }
        }

        Some(Command::Run {
            config,
            listen,
            root,
        }) => serve(config, listen, root),

        None => serve(None, None, None),
    }
}

fn serve(config: Option<PathBuf>, listen: Option<String>, root: Option<PathBuf>) {
    let cfg = match load_config(config.as_deref(), listen, root) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    init_logging(&cfg.logging);

    if let Err(e) = server::run(cfg) {
        tracing::error!(error = ?e, "failed to start blip");
        std::process::exit(1);
    }
}

/// Loads the config file (or defaults) and applies command-line overrides.
fn load_config(
    path: Option<&Path>,
    listen: Option<String>,
    root: Option<PathBuf>,
) -> Result<BlipConfig> {
    let mut cfg = match path {
        Some(path) => BlipConfig::from_file(path)
            .with_context(|| format!("failed to load blip config {}", path.display()))?,
        None => BlipConfig::default(),
    };

    if let Some(listen) = listen {
        cfg.server.listen = listen;
    }
    if let Some(root) = root {
        cfg.static_files.root = root;
    }

    cfg.validate().context("invalid configuration")?;

    Ok(cfg)
}
