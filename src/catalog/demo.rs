//! Demo catalog - an offline card source for showcasing the TUI
//!
//! Generates a deterministic set of cards and serves them with the same
//! paging and filtering rules as the real API, plus a short artificial
//! delay so the loading indicator is visible.

use super::{Card, CardPage, CardQuery, FetchError};
use std::time::Duration;

const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

const PREFIXES: &[&str] = &[
    "Lightning", "Shivan", "Serra", "Llanowar", "Dark", "Ancestral", "Howling", "Tundra",
    "Sengir", "Crimson", "Obsidian", "Ivory", "Volcanic", "Whispering", "Emerald",
];

const SUFFIXES: &[&str] = &["Bolt", "Dragon", "Angel", "Elves", "Ritual"];

/// (type line, rules text) pairs cycled across generated cards
const PROFILES: &[(&str, &str)] = &[
    ("Instant", "Deal 3 damage to any target."),
    ("Creature — Dragon", "Flying\n{R}: This creature gets +1/+0 until end of turn."),
    ("Creature — Angel", "Flying, vigilance"),
    ("Creature — Elf Druid", "{T}: Add {G}."),
    ("Sorcery", "Add {B}{B}{B}."),
    ("Artifact", ""),
];

/// In-memory card catalog
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    cards: Vec<Card>,
    latency: Duration,
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoCatalog {
    pub fn new() -> Self {
        Self {
            cards: generate_cards(),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Override the simulated network delay
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Serve a page using the API's rules: case-insensitive name substring
    /// match, 1-based pages, header counts always present
    pub async fn fetch_page(&self, query: &CardQuery) -> Result<CardPage, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let needle = query.name.trim().to_lowercase();
        let matching: Vec<&Card> = self
            .cards
            .iter()
            .filter(|card| needle.is_empty() || card.name.to_lowercase().contains(&needle))
            .collect();

        let size = query.page_size.max(1) as usize;
        let skip = (query.page.max(1) as usize - 1).saturating_mul(size);
        let cards: Vec<Card> = matching
            .iter()
            .skip(skip)
            .take(size)
            .map(|card| (*card).clone())
            .collect();

        tracing::trace!(
            "Demo catalog: page {} of '{}' -> {} cards ({} matching)",
            query.page,
            query.name,
            cards.len(),
            matching.len()
        );

        Ok(CardPage {
            count: Some(cards.len() as u64),
            total_count: Some(matching.len() as u64),
            cards,
        })
    }
}

fn generate_cards() -> Vec<Card> {
    let total = PREFIXES.len() * SUFFIXES.len();
    (0..total)
        .map(|i| {
            let name = format!(
                "{} {}",
                PREFIXES[i % PREFIXES.len()],
                SUFFIXES[i / PREFIXES.len()]
            );
            let (type_line, text) = PROFILES[i % PROFILES.len()];
            let slug = name.to_lowercase().replace(' ', "-");
            Card {
                // Every fourth card has no artwork so the fallback gets exercised
                image_url: (i % 4 != 3).then(|| format!("https://cards.example.com/{}.jpg", slug)),
                text: (!text.is_empty()).then(|| text.to_string()),
                type_line: type_line.to_string(),
                name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DemoCatalog {
        DemoCatalog::new().with_latency(Duration::ZERO)
    }

    #[test]
    fn generated_names_are_unique() {
        let cards = generate_cards();
        let mut names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), cards.len());
        assert!(cards.iter().any(|c| c.image().is_none()));
    }

    #[tokio::test]
    async fn pages_through_everything() {
        let demo = catalog();
        let total = generate_cards().len();

        let first = demo.fetch_page(&CardQuery::new(1, 20, "")).await.unwrap();
        assert_eq!(first.cards.len(), 20);
        assert_eq!(first.total_count, Some(total as u64));
        assert_eq!(first.count, Some(20));

        let last_page = total.div_ceil(20) as u32;
        let last = demo
            .fetch_page(&CardQuery::new(last_page, 20, ""))
            .await
            .unwrap();
        assert_eq!(last.cards.len(), total - 20 * (last_page as usize - 1));

        let beyond = demo
            .fetch_page(&CardQuery::new(last_page + 1, 20, ""))
            .await
            .unwrap();
        assert!(beyond.cards.is_empty());
        assert_eq!(beyond.count, Some(0));
    }

    #[tokio::test]
    async fn filters_case_insensitively() {
        let demo = catalog();
        let page = demo.fetch_page(&CardQuery::new(1, 100, "bOLT")).await.unwrap();
        assert_eq!(page.cards.len(), PREFIXES.len());
        assert!(page.cards.iter().all(|c| c.name.ends_with("Bolt")));
        assert_eq!(page.total_count, Some(PREFIXES.len() as u64));
    }

    #[tokio::test]
    async fn unknown_name_yields_empty_page() {
        let demo = catalog();
        let page = demo
            .fetch_page(&CardQuery::new(1, 20, "Nonexistent"))
            .await
            .unwrap();
        assert!(page.cards.is_empty());
        assert_eq!(page.total_count, Some(0));
    }
}
