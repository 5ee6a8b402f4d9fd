mod error;
mod logging;
mod server;
mod static_files;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::{DEFAULT_LISTEN, ServerConfig};
pub use static_files::StaticFilesConfig;

use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::{Component, Path};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlipConfig {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub logging: LoggingConfig,
}

impl BlipConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let cfg: Self = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr()?;

        let index = Path::new(&self.static_files.index_file);
        let mut components = index.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => Err(ConfigError::InvalidIndexFile {
                index_file: self.static_files.index_file.clone(),
            }),
        }
    }

    /// The configured listen address, parsed.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .listen
            .parse()
            .map_err(|source| ConfigError::InvalidListen {
                listen: self.server.listen.clone(),
                source,
            })
    }
}

impl FromStr for BlipConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(|e| ConfigError::parse("<string>", e))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
