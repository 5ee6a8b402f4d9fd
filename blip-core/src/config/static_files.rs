use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticFilesConfig {
    /// Directory that request paths are resolved against.
    pub root: PathBuf,

    /// Served for "/" and substituted for directory paths.
    pub index_file: String,

    /// Reject resolved paths that canonicalize outside `root`.
    pub confine_to_root: bool,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index_file: "index.html".to_string(),
            confine_to_root: false,
        }
    }
}
