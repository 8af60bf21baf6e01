use std::path::PathBuf;

use clap::Parser;
use rpick_github::DEFAULT_API_URL;
use rpick_observe::{LoggerConfig, LoggerFormat, LoggerLevel};

/// Command-line and environment surface of the action.
///
/// Action inputs arrive as `INPUT_<NAME>` variables set by the runner; empty values count as unset.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rpick")]
#[command(about = "Pick a self-hosted runner pool if enough of it is online, otherwise a fallback runner")]
#[command(version)]
pub struct Cli {
    /// Token used to read the runner inventory
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Comma-separated labels of the primary runner pool
    #[arg(long, env = "INPUT_PRIMARY-RUNNER")]
    pub primary_runner: Option<String>,

    /// Runner to use when the primary pool is not usable
    #[arg(long, env = "INPUT_FALLBACK-RUNNER")]
    pub fallback_runner: Option<String>,

    /// Number of idle primary runners required (empty or 0 disables the check)
    #[arg(long, env = "INPUT_PRIMARIES-REQUIRED")]
    pub primaries_required: Option<String>,

    /// Read organization runners instead of repository runners
    #[arg(long, env = "INPUT_ORGANIZATION")]
    pub organization: Option<String>,

    /// Read enterprise runners instead of repository runners
    #[arg(long, env = "INPUT_ENTERPRISE")]
    pub enterprise: Option<String>,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// GitHub API root
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// File that receives step outputs; stdout when unset
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// Log filter expression
    #[arg(long, env = "RPICK_LOG", default_value = "info")]
    pub log_level: LoggerLevel,

    /// Log output format (text|json)
    #[arg(long, env = "RPICK_LOG_FORMAT", default_value = "text")]
    pub log_format: LoggerFormat,

    /// Set to 1 by the runner when step debug logging is enabled
    #[arg(long, env = "RUNNER_DEBUG", hide = true)]
    pub runner_debug: Option<String>,
}

impl Cli {
    /// API root, falling back to the public endpoint when blank.
    pub fn api_url(&self) -> &str {
        non_blank(self.api_url.as_deref()).unwrap_or(DEFAULT_API_URL)
    }

    /// Logger settings; step debug mode raises the filter to `debug`.
    pub fn logger_config(&self) -> LoggerConfig {
        let level = if self.runner_debug.as_deref().map(str::trim) == Some("1") {
            LoggerLevel::new("debug").unwrap_or_else(|_| self.log_level.clone())
        } else {
            self.log_level.clone()
        };

        LoggerConfig {
            format: self.log_format,
            level,
            ..Default::default()
        }
    }
}

/// Trimmed value, or `None` when absent or blank.
pub fn non_blank(v: Option<&str>) -> Option<&str> {
    v.map(str::trim).filter(|s| !s.is_empty())
}
