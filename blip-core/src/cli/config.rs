use crate::config::BlipConfig;
use anyhow::{Result, bail};
use clap::Subcommand;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to the config file
        #[arg(default_value = "blip.toml")]
        path: PathBuf,
    },

    /// Write a default config file
    Init {
        /// Where to write the config file
        #[arg(default_value = "blip.toml")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(&path),
        ConfigCmd::Init { path } => init(&path),
    }
}

pub fn check(path: &Path) -> Result<()> {
    let cfg = BlipConfig::from_file(path)?;

    println!("✔ Config loaded successfully");
    println!("✔ listen: {}", cfg.listen_addr()?);
    println!("✔ root: {}", cfg.static_files.root.display());
    println!("✔ index file: {}", cfg.static_files.index_file);
    if cfg.static_files.confine_to_root {
        println!("✔ requests confined to root");
    }
    if !cfg.static_files.root.is_dir() {
        println!(
            "! root {} is not a directory; every request will 404",
            cfg.static_files.root.display()
        );
    }

    Ok(())
}

pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::write(path, DEFAULT_CONFIG_TOML.trim_start())?;

    println!("✔ Wrote default config to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  blip config check {}", path.display());
    println!("  blip run --config {}", path.display());

    Ok(())
}

pub const DEFAULT_CONFIG_TOML: &str = r#"
[server]
listen = "0.0.0.0:6703"
# pid_file = "/var/run/blip.pid"

[static_files]
# Request paths are resolved relative to this directory.
root = "."
index_file = "index.html"
# Reject paths that resolve outside of root.
confine_to_root = false

[logging]
level = "info"
# format = "json"
"#;
