//! ntfy.sh relay adapter.

mod client;

pub use client::{NTFY_SERVER, NtfyRelayClient};
