//! Reusable UI widgets.

mod confetti;
mod footer_bar;
mod input;

pub use confetti::{BurstSession, ConfettiOverlay};
pub use footer_bar::FooterBar;
pub use input::TextInput;
