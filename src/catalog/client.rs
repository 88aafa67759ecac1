//! HTTP client for the card catalog API
//!
//! One GET per page, no credentials, no retries. Anything that goes wrong
//! comes back as a `FetchError` and the caller decides what to do with it.

use super::{Card, CardPage, CardQuery, FetchError};
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use serde::Deserialize;
use std::time::Duration;

/// Response header carrying the total number of matches
const TOTAL_COUNT_HEADER: &str = "Total-Count";
/// Response header carrying the number of items in this page
const COUNT_HEADER: &str = "Count";

/// Maximum characters of an error body kept in `FetchError::Status`
const MAX_ERROR_BODY: usize = 200;

/// JSON envelope of `/cards/`
#[derive(Debug, Deserialize)]
struct CardsEnvelope {
    #[serde(default)]
    cards: Vec<Card>,
}

/// Async client for `{api_url}/cards/`
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Build a client from the `[catalog]` config section
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(4)
            .build()
            .context("Failed to create HTTP client")?;

        tracing::debug!(
            "Catalog client ready: {} (timeout {}s)",
            config.api_url,
            config.timeout_secs
        );

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// Build a client with default settings against an arbitrary base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a single page of cards
    pub async fn fetch_page(&self, query: &CardQuery) -> Result<CardPage, FetchError> {
        let url = query.to_url(&self.base_url)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.trim().chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let envelope: CardsEnvelope =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(CardPage {
            cards: envelope.cards,
            total_count: header_count(&headers, TOTAL_COUNT_HEADER),
            count: header_count(&headers, COUNT_HEADER),
        })
    }
}

/// Parse a numeric response header, ignoring missing or garbled values
fn header_count(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cards_body(names: &[&str]) -> String {
        let cards: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "type": "Instant",
                    "text": "Deal 3 damage to any target.",
                    "imageUrl": format!("https://img.example.com/{}.png", name),
                    "rarity": "Common"
                })
            })
            .collect();
        serde_json::json!({ "cards": cards }).to_string()
    }

    #[tokio::test]
    async fn test_fetch_page_decodes_cards_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/"))
            .and(query_param("page", "1"))
            .and(query_param("pageSize", "2"))
            .and(query_param("name", "Bolt"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Total-Count", "7")
                    .insert_header("Count", "2")
                    .set_body_raw(cards_body(&["Lightning Bolt", "Chain Bolt"]), "application/json"),
            )
            .mount(&server)
            .await;

        let client = CatalogClient::with_base_url(server.uri());
        let page = client
            .fetch_page(&CardQuery::new(1, 2, "Bolt"))
            .await
            .expect("fetch page");

        assert_eq!(page.cards.len(), 2);
        assert_eq!(page.cards[0].name, "Lightning Bolt");
        assert_eq!(page.total_count, Some(7));
        assert_eq!(page.count, Some(2));
    }

    #[tokio::test]
    async fn test_fetch_page_without_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Total-Count", "lots")
                    .set_body_raw(cards_body(&["Shock"]), "application/json"),
            )
            .mount(&server)
            .await;

        let client = CatalogClient::with_base_url(server.uri());
        let page = client
            .fetch_page(&CardQuery::new(1, 20, ""))
            .await
            .expect("fetch page");

        assert_eq!(page.cards.len(), 1);
        assert_eq!(page.total_count, None);
        assert_eq!(page.count, None);
    }

    #[tokio::test]
    async fn test_missing_cards_field_is_empty_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let client = CatalogClient::with_base_url(server.uri());
        let page = client
            .fetch_page(&CardQuery::new(9, 20, ""))
            .await
            .expect("fetch page");
        assert!(page.cards.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = CatalogClient::with_base_url(server.uri());
        let err = client
            .fetch_page(&CardQuery::new(1, 20, ""))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 503,
                message: "maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_body_maps_to_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cards/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = CatalogClient::with_base_url(server.uri());
        let err = client
            .fetch_page(&CardQuery::new(1, 20, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_transport() {
        // Port 9 (discard) on localhost is essentially never listening
        let client = CatalogClient::with_base_url("http://127.0.0.1:9");
        let err = client
            .fetch_page(&CardQuery::new(1, 20, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
