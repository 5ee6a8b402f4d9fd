use http::{Method, StatusCode};

use crate::config::StaticFilesConfig;
use crate::http::{Request, Response};
use crate::static_files::resolve::{ResolveError, resolve_static_path};
use crate::static_files::serve::{ServeError, serve_file, serve_file_head};

/// Answers a GET or HEAD request from the static root.
///
/// Anything that keeps the path from resolving to a readable file is a 404.
pub async fn handle_static_request(cfg: &StaticFilesConfig, request: &Request) -> Response {
    let resolved = match resolve_static_path(cfg, &request.path).await {
        Ok(file) => file,
        Err(e) => return error_response(request, map_resolve_error(&e), &e),
    };

    let served = if request.method == Method::HEAD {
        serve_file_head(&resolved).await
    } else {
        serve_file(&resolved).await
    };

    served.unwrap_or_else(|e| error_response(request, map_serve_error(&e), &e))
}

fn map_resolve_error(err: &ResolveError) -> StatusCode {
    match err {
        ResolveError::EmptyPath
        | ResolveError::NotFound { .. }
        | ResolveError::NotAFile { .. }
        | ResolveError::OutsideRoot { .. } => StatusCode::NOT_FOUND,
    }
}

fn map_serve_error(_err: &ServeError) -> StatusCode {
    StatusCode::NOT_FOUND
}

fn error_response(
    request: &Request,
    status: StatusCode,
    reason: &dyn std::error::Error,
) -> Response {
    tracing::info!(
        method = %request.method,
        path = %request.path,
        status = status.as_u16(),
        reason = %reason,
        "file not found"
    );

    Response::empty(status)
}
