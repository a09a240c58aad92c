//! Configuration for the portfolio app
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{FileLogging, LogRotation, LoggingConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default fraction of a section that must be on screen before it fades in
pub const DEFAULT_FADE_THRESHOLD: f64 = 0.2;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark", "light", "dracula", "nord"
    pub theme: String,

    /// Whether to run the TUI (disabled = render the page once to stdout)
    pub enable_tui: bool,

    /// Demo mode: run a scripted scroll tour through the page
    pub demo_mode: bool,

    /// Optional portfolio content file; bundled sample when absent
    pub content_file: Option<PathBuf>,

    /// Fraction of a section that must be inside the viewport before it
    /// counts as visible, clamped to [0, 1]
    pub fade_threshold: f64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            enable_tui: true,
            demo_mode: false,
            content_file: None,
            fade_threshold: DEFAULT_FADE_THRESHOLD,
            logging: LoggingConfig::default(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub content_file: Option<String>,
    pub fade_threshold: Option<f64>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults while the
    /// user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("CONFIG ERROR - Failed to parse {}", path.display());
                    eprintln!();
                    eprintln!("  {}", e);
                    eprintln!();
                    eprintln!("  To reset, delete the file and restart folio.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("CONFIG ERROR - Cannot read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = std::env::var("FOLIO_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // TUI toggle: env only (runtime flag)
        let enable_tui = std::env::var("FOLIO_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Demo mode: env only (runtime flag)
        let demo_mode = std::env::var("FOLIO_DEMO")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        // Content file: env > file
        let content_file = std::env::var("FOLIO_CONTENT")
            .ok()
            .or(file.content_file)
            .map(PathBuf::from);

        // Fade threshold: env > file > default, always clamped
        let fade_threshold = std::env::var("FOLIO_FADE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.fade_threshold)
            .unwrap_or(defaults.fade_threshold)
            .clamp(0.0, 1.0);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            enable_tui,
            demo_mode,
            content_file,
            fade_threshold,
            logging,
        }
    }
}
