//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::entities::Channel;
use crate::infrastructure::ntfy::NTFY_SERVER;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, file-backed with CLI overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Without one, nothing is written: the terminal is
    /// owned by the UI.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Relay server base URL.
    #[serde(default = "default_server")]
    pub server: String,

    /// Default relay channel. A special recipient may override it at
    /// selection time.
    #[serde(default)]
    pub channel: Channel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Play the particle burst on successful sends.
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
        }
    }
}

fn default_server() -> String {
    NTFY_SERVER.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            server: default_server(),
            channel: Channel::default(),
            ui: UiConfig::default(),
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(server) = args.server {
            self.server = server;
        }
        if let Some(channel) = args.channel {
            self.channel = Channel::new(channel);
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server, "https://ntfy.sh");
        assert_eq!(config.channel.as_str(), "zxrd");
        assert!(config.ui.enable_animations);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_config_file() {
        let toml_content = r#"
            server = "https://ntfy.example"
            channel = "standup"

            [ui]
            enable_animations = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.server, "https://ntfy.example");
        assert_eq!(config.channel.as_str(), "standup");
        assert!(!config.ui.enable_animations);
    }

    #[test]
    fn test_merge_with_args_overrides_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Debug),
            server: Some("http://localhost:8080".to_string()),
            channel: Some("dev".to_string()),
            enable_animations: Some(false),
        };

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.server, "http://localhost:8080");
        assert_eq!(config.channel.as_str(), "dev");
        assert!(!config.ui.enable_animations);
    }
}
