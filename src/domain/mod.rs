//! Domain layer with core entities, the selection flow, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Selection flow state machine.
pub mod wizard;

pub use entities::{Channel, Identity, OutboundMessage, Particle};
pub use errors::SendError;
pub use ports::{RandomSource, RelayPort};
pub use wizard::{SelectionEffect, WizardState};
