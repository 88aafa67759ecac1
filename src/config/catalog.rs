//! Card catalog API configuration

use serde::Deserialize;

use super::VERSION;
use crate::browser::MAX_PAGE_SIZE;

const DEFAULT_API_URL: &str = "https://api.magicthegathering.io/v1";
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Catalog API settings
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Base URL; requests go to `{api_url}/cards/`
    pub api_url: String,
    /// Cards per page (1..=100)
    pub page_size: u32,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("cardscope/{}", VERSION),
        }
    }
}

/// Catalog settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileCatalog {
    pub api_url: Option<String>,
    pub page_size: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl CatalogConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileCatalog>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            api_url: file
                .api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            page_size: file
                .page_size
                .map(Self::clamp_page_size)
                .unwrap_or(defaults.page_size),
            timeout_secs: file
                .timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.timeout_secs),
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
        }
    }

    pub fn clamp_page_size(size: u32) -> u32 {
        size.clamp(1, MAX_PAGE_SIZE)
    }
}
