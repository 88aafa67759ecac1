//! Configuration for the card browser
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/cardscope/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod catalog;
mod observability;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use catalog::{CatalogConfig, FileCatalog};
pub use observability::{FileLogging, LogRotation, LoggingConfig};

use crate::browser::DEFAULT_SCROLL_THRESHOLD;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_THEME: &str = "Dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Dark", "Light", "Nord", "Dracula"
    pub theme: String,

    /// Rows from the end of the gallery at which the next page is requested
    pub scroll_threshold: usize,

    /// Demo mode: serve cards from the built-in offline catalog
    pub demo_mode: bool,

    /// Card catalog API settings
    pub catalog: CatalogConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            demo_mode: false,
            catalog: CatalogConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub scroll_threshold: Option<usize>,

    /// Optional [catalog] section
    pub catalog: Option<FileCatalog>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/cardscope/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("cardscope").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be read or parsed ends the
    /// process with a readable message instead of falling back to defaults.
    pub(crate) fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Numbers where a string is expected (or vice versa)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `cardscope config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Load configuration from the file only, ignoring the environment
    ///
    /// Used by `config --update` so one-off env overrides don't get
    /// written into the user's file.
    pub fn from_file_only() -> Self {
        Self::from_sources(Self::load_file_config(), |_| None)
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("CARDSCOPE_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Scroll threshold: file > default
        let scroll_threshold = file.scroll_threshold.unwrap_or(DEFAULT_SCROLL_THRESHOLD);

        // Demo mode: env only (runtime flag)
        let demo_mode = env("CARDSCOPE_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // Catalog: file section first, then env overrides on top
        let mut catalog = CatalogConfig::from_file(file.catalog);
        if let Some(url) = env("CARDSCOPE_API_URL") {
            catalog.api_url = url;
        }
        if let Some(size) = env("CARDSCOPE_PAGE_SIZE").and_then(|v| v.trim().parse().ok()) {
            catalog.page_size = CatalogConfig::clamp_page_size(size);
        }

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            theme,
            scroll_threshold,
            demo_mode,
            catalog,
            logging,
        }
    }
}
