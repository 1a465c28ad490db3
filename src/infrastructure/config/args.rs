use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "duckchat",
    version,
    about = "A tiny terminal sender for ntfy.sh with an emoji identity picker",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Relay server base URL.
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Default relay channel.
    #[arg(long, value_name = "NAME")]
    pub channel: Option<String>,

    /// Play the particle burst on successful sends.
    #[arg(long)]
    pub enable_animations: Option<bool>,
}
