//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/tilstats/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/tilstats/` (~/.config/tilstats/)
//! - State/Logs: `$XDG_STATE_HOME/tilstats/` (~/.local/state/tilstats/)

use crate::corpus::EntryFilter;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Dashboard defaults
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Which entries count toward analytics
    #[serde(default)]
    pub filter: FilterConfig,

    /// Treemap bounding box and segment cap
    #[serde(default)]
    pub treemap: TreemapConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard defaults
#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Tracked root prefix (e.g. "til")
    #[serde(default = "default_root")]
    pub root: String,

    /// Number of buckets in the weekly trend
    #[serde(default = "default_week_count")]
    pub week_count: usize,

    /// Number of entries listed by the "recent" view
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            week_count: default_week_count(),
            recent_count: default_recent_count(),
        }
    }
}

fn default_root() -> String {
    "til".to_string()
}

fn default_week_count() -> usize {
    16
}

fn default_recent_count() -> usize {
    5
}

/// Entry filter settings
#[derive(Debug, Deserialize, Clone)]
pub struct FilterConfig {
    /// Tracked file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Filename of the backlog tracker, never counted as an entry
    #[serde(default = "default_backlog_filename")]
    pub backlog_filename: String,

    /// Label an entry must carry to be tracked
    #[serde(default = "default_tracking_label")]
    pub tracking_label: String,

    /// Label marking index / table-of-contents notes
    #[serde(default = "default_index_label")]
    pub index_label: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            backlog_filename: default_backlog_filename(),
            tracking_label: default_tracking_label(),
            index_label: default_index_label(),
        }
    }
}

impl FilterConfig {
    /// Build the entry filter described by this config
    pub fn to_filter(&self) -> EntryFilter {
        EntryFilter {
            extension: self.extension.clone(),
            backlog_filename: self.backlog_filename.clone(),
            tracking_label: self.tracking_label.clone(),
            index_label: self.index_label.clone(),
        }
    }
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_backlog_filename() -> String {
    "backlog.md".to_string()
}

fn default_tracking_label() -> String {
    "til".to_string()
}

fn default_index_label() -> String {
    "moc".to_string()
}

/// Treemap layout defaults
#[derive(Debug, Deserialize, Clone)]
pub struct TreemapConfig {
    #[serde(default = "default_treemap_width")]
    pub width: f64,

    #[serde(default = "default_treemap_height")]
    pub height: f64,

    /// Segments shown before the rest fold into "Others"
    #[serde(default = "default_max_segments")]
    pub max_segments: usize,
}

impl Default for TreemapConfig {
    fn default() -> Self {
        Self {
            width: default_treemap_width(),
            height: default_treemap_height(),
            max_segments: default_max_segments(),
        }
    }
}

fn default_treemap_width() -> f64 {
    400.0
}

fn default_treemap_height() -> f64 {
    160.0
}

fn default_max_segments() -> usize {
    7
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.dashboard.root.trim_matches('/').is_empty() {
            return Err(Error::Config(
                "dashboard.root must not be empty".to_string(),
            ));
        }
        if self.treemap.max_segments == 0 {
            return Err(Error::Config(
                "treemap.max_segments must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/tilstats/config.toml` (~/.config/tilstats/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("tilstats").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/tilstats/` (~/.local/state/tilstats/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("tilstats")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/tilstats/tilstats.log` (~/.local/state/tilstats/tilstats.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("tilstats.log")
    }
}
