//! Data transfer objects.

mod send_request;

pub use send_request::SendRequest;
