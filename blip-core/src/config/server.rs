use serde::Deserialize;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:6703";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// e.g. "0.0.0.0:6703"
    pub listen: String,

    /// Written at startup and removed on Ctrl-C.
    pub pid_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            pid_file: None,
        }
    }
}
