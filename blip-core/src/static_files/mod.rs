mod handler;
mod resolve;
mod serve;

#[cfg(test)]
mod tests;

pub use handler::handle_static_request;
pub use resolve::{ResolveError, ResolvedFile, resolve_static_path};
pub use serve::{ServeError, serve_file, serve_file_head};
