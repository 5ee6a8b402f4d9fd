mod content_type;
mod request;
mod response;

#[cfg(test)]
mod tests;

pub use content_type::content_type_for;
pub use request::{MAX_HEAD_SIZE, ParseError, Request, parse_request};
pub use response::{Body, HTTP_VERSION, Response, status_line};
