//! Port definitions for external dependencies.

/// Random source port.
pub mod random_source;
mod relay_port;

pub use random_source::RandomSource;
pub use relay_port::RelayPort;
