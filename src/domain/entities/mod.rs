//! Domain entity definitions.

mod channel;
mod identity;
mod outbound;
mod particle;

pub use channel::Channel;
pub use identity::{Identity, IdentityKey};
pub use outbound::OutboundMessage;
pub use particle::{
    BURST_SIZE, GRAVITY, LAUNCH_IMPULSE, PALETTE_SIZE, Particle, VELOCITY_SPREAD,
};
