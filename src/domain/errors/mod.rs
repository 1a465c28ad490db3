//! Domain error types.

mod send_error;

pub use send_error::SendError;
