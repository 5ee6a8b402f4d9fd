use crate::config::StaticFilesConfig;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("empty request path")]
    EmptyPath,

    #[error("no such file {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("{path} is outside the server root")]
    OutsideRoot { path: PathBuf },
}

/// A file on disk that a request path resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,

    /// Final path component, used to pick the Content-Type.
    pub name: String,

    pub size: u64,
}

/// Maps a request path onto a file under the configured root.
///
/// "/" becomes the index file, one leading slash is stripped, and a directory
/// is replaced by its index file (one level only). Dot segments are not
/// normalized unless `confine_to_root` is set.
pub async fn resolve_static_path(
    cfg: &StaticFilesConfig,
    request_path: &str,
) -> Result<ResolvedFile, ResolveError> {
    let relative = if request_path == "/" {
        cfg.index_file.as_str()
    } else {
        request_path
    };
    let relative = relative.strip_prefix('/').unwrap_or(relative);

    if relative.is_empty() {
        return Err(ResolveError::EmptyPath);
    }

    let mut path = cfg.root.join(relative);
    let mut metadata = stat(&path).await?;

    // Directory-index fallback
    if metadata.is_dir() {
        path.push(&cfg.index_file);
        metadata = stat(&path).await?;
    }

    if !metadata.is_file() {
        return Err(ResolveError::NotAFile { path });
    }

    if cfg.confine_to_root {
        ensure_within_root(cfg, &path).await?;
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ResolvedFile {
        path,
        name,
        size: metadata.len(),
    })
}

async fn stat(path: &Path) -> Result<std::fs::Metadata, ResolveError> {
    fs::metadata(path)
        .await
        .map_err(|source| ResolveError::NotFound {
            path: path.to_path_buf(),
            source,
        })
}

async fn ensure_within_root(cfg: &StaticFilesConfig, path: &Path) -> Result<(), ResolveError> {
    let outside = || ResolveError::OutsideRoot {
        path: path.to_path_buf(),
    };

    let root_canon = fs::canonicalize(&cfg.root).await.map_err(|_| outside())?;
    let target_canon = fs::canonicalize(path).await.map_err(|_| outside())?;

    // Enforce containment
    if !target_canon.starts_with(&root_canon) {
        return Err(outside());
    }

    Ok(())
}
