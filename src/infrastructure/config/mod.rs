//! Configuration loading and CLI arguments.

mod app_config;
mod args;
mod storage;

pub use app_config::{AppConfig, LogLevel, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
