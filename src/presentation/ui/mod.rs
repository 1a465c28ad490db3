//! Screen components.

mod app;
mod compose_screen;
mod picker_screen;

pub use app::App;
pub use compose_screen::{ComposeAction, ComposeScreen, SubmissionStatus};
pub use picker_screen::{PickerAction, PickerScreen};
