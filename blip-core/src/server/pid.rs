use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A file holding the current process id.
#[derive(Debug, Clone)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        fs::write(&path, format!("{}\n", std::process::id()))
            .with_context(|| format!("failed to write pid file {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort removal.
    pub fn remove(&self) {
        let _ = fs::remove_file(&self.path);
    }
}
