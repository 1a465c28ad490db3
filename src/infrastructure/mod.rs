//! Infrastructure layer containing adapters for external services.

/// Configuration loading and CLI arguments.
pub mod config;
/// ntfy.sh relay adapter.
pub mod ntfy;
/// Thread-local RNG adapter.
pub mod random;

pub use config::{AppConfig, CliArgs, StorageManager};
pub use ntfy::NtfyRelayClient;
pub use random::ThreadRandomSource;
