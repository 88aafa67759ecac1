//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# cardscope configuration

# Theme: Dark, Light, Nord, Dracula (press 't' in the TUI to cycle)
theme = "{theme}"

# Load the next page when the gallery is this many rows from the end
scroll_threshold = {threshold}

# Card catalog API
[catalog]
api_url = "{api_url}"
page_size = {page_size}  # 1-100
timeout_secs = {timeout}
user_agent = "{user_agent}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the TUI log panel or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = escape(&self.theme),
            threshold = self.scroll_threshold,
            api_url = escape(&self.catalog.api_url),
            page_size = self.catalog.page_size,
            timeout = self.catalog.timeout_secs,
            user_agent = escape(&self.catalog.user_agent),
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
