//! Presentation layer: screens, widgets, and terminal event handling.

/// Terminal event classification.
pub mod events;
/// Screens and the application orchestrator.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
