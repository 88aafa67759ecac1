//! Card catalog access
//!
//! Types for the paginated card API and the sources that serve them:
//! - `CatalogClient`: HTTP client for the real catalog
//! - `DemoCatalog`: offline catalog for showcasing the TUI
//!
//! The rest of the application only talks to `CardSource`, so the browse
//! session never knows (or cares) whether a page came over the network.

mod client;
mod demo;
mod error;

pub use client::CatalogClient;
pub use demo::DemoCatalog;
pub use error::FetchError;

use crate::config::Config;
use anyhow::Result;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Marker shown in place of a card image when the API returned none
pub const NO_IMAGE: &str = "[no image]";

/// A single card as returned by the catalog
///
/// Field names follow the API's camelCase JSON. Everything except the name
/// is optional upstream, so missing fields decode to empty values rather
/// than failing the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Full type line, e.g. "Creature — Elf Druid"
    #[serde(rename = "type", default)]
    pub type_line: String,
}

impl Card {
    /// Image URL, treating an empty string the same as a missing one
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Rules text, or an empty string for vanilla cards
    pub fn rules_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Human-readable rendering used for clipboard copy and headless output
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.name, self.type_line);
        if !self.rules_text().is_empty() {
            out.push('\n');
            out.push_str(self.rules_text());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(self.image().unwrap_or(NO_IMAGE));
        out
    }
}

/// One decoded page of results plus the counts from the response headers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPage {
    pub cards: Vec<Card>,
    /// `Total-Count` header: matches across all pages
    pub total_count: Option<u64>,
    /// `Count` header: items in this page
    pub count: Option<u64>,
}

/// Parameters of a single catalog request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// Name substring filter; empty means no filter
    pub name: String,
}

impl CardQuery {
    pub fn new(page: u32, page_size: u32, name: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            name: name.into(),
        }
    }

    /// Build `{base}/cards/?page=..&pageSize=..&name=..`
    ///
    /// All three parameters are always present and URL-encoded; `name` is
    /// sent empty when there is no filter.
    pub fn to_url(&self, base_url: &str) -> Result<Url, FetchError> {
        let endpoint = format!("{}/cards/", base_url.trim_end_matches('/'));
        Url::parse_with_params(
            &endpoint,
            &[
                ("page", self.page.to_string()),
                ("pageSize", self.page_size.to_string()),
                ("name", self.name.clone()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", endpoint, e)))
    }
}

/// Where card pages come from
///
/// Enum dispatch keeps the fetch future `Send` so it can be spawned onto
/// the tokio runtime without boxing.
pub enum CardSource {
    Http(CatalogClient),
    Demo(DemoCatalog),
}

impl CardSource {
    /// Pick the source based on configuration (demo mode or real API)
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.demo_mode {
            tracing::info!("Running in DEMO MODE - serving cards from the built-in catalog");
            Ok(Self::Demo(DemoCatalog::new()))
        } else {
            Ok(Self::Http(CatalogClient::new(&config.catalog)?))
        }
    }

    /// Fetch one page of cards
    pub async fn fetch_page(&self, query: &CardQuery) -> Result<CardPage, FetchError> {
        match self {
            Self::Http(client) => client.fetch_page(query).await,
            Self::Demo(demo) => demo.fetch_page(query).await,
        }
    }

    /// Short label for the title bar
    pub fn label(&self) -> String {
        match self {
            Self::Http(client) => client.base_url().to_string(),
            Self::Demo(_) => "demo catalog".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_contains_all_three_parameters() {
        let query = CardQuery::new(1, 20, "");
        let url = query.to_url("https://api.example.com/v1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/cards/?page=1&pageSize=20&name="
        );
    }

    #[test]
    fn url_encodes_search_term() {
        let query = CardQuery::new(3, 50, "Bolt & Co");
        let url = query.to_url("https://api.example.com/v1/").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/cards/?page=3&pageSize=50&name=Bolt+%26+Co"
        );

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "3".to_string()),
                ("pageSize".to_string(), "50".to_string()),
                ("name".to_string(), "Bolt & Co".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let query = CardQuery::new(1, 20, "");
        let err = query.to_url("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn query_clamps_page_and_size() {
        let query = CardQuery::new(0, 0, "x");
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 1);
    }

    #[test]
    fn card_decodes_with_missing_optional_fields() {
        let card: Card = serde_json::from_str(
            r#"{"name": "Grizzly Bears", "type": "Creature — Bear", "manaCost": "{1}{G}"}"#,
        )
        .unwrap();
        assert_eq!(card.name, "Grizzly Bears");
        assert_eq!(card.type_line, "Creature — Bear");
        assert_eq!(card.image(), None);
        assert_eq!(card.rules_text(), "");
    }

    #[test]
    fn empty_image_url_counts_as_missing() {
        let card = Card {
            name: "Island".to_string(),
            image_url: Some("  ".to_string()),
            text: None,
            type_line: "Basic Land — Island".to_string(),
        };
        assert_eq!(card.image(), None);
        assert!(card.to_plain_text().ends_with(NO_IMAGE));
    }
}
