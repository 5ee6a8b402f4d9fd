mod connection;
mod listener;
mod pid;
pub mod setup;


pub use connection::{ConnectionError, dispatch, handle_connection};
pub use listener::{Server, ServerError};
pub use pid::PidFile;
pub use setup::run;
