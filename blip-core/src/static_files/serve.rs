use crate::http::Response;
use crate::static_files::ResolvedFile;
use bytes::Bytes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
#[error("failed to read {path}: {source}")]
pub struct ServeError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Reads the whole file into a 200 response.
///
/// Content-Length is taken from the bytes actually read, so it stays exact
/// even if the file changed since it was resolved.
pub async fn serve_file(file: &ResolvedFile) -> Result<Response, ServeError> {
    let contents = fs::read(&file.path).await.map_err(|source| ServeError {
        path: file.path.clone(),
        source,
    })?;

    Ok(Response::file(&file.name, Bytes::from(contents)))
}

/// Like [`serve_file`] but only checks that the file can be opened.
pub async fn serve_file_head(file: &ResolvedFile) -> Result<Response, ServeError> {
    fs::File::open(&file.path)
        .await
        .map_err(|source| ServeError {
            path: file.path.clone(),
            source,
        })?;

    Ok(Response::file_head(&file.name, file.size))
}
