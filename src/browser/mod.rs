//! Browse session - the card browser's state machine
//!
//! Every external event (keystroke, scroll, finished request) becomes an
//! `Action` passed to `BrowseSession::dispatch`. A dispatch may hand back a
//! `FetchRequest`, which the caller runs and later feeds back as
//! `Action::FetchSettled`. The session itself never performs I/O.
//!
//! Requests carry a sequence number; only the response to the most recently
//! issued request is applied, everything older is dropped on arrival.

mod fetcher;
mod hooks;
mod pagination;
mod scroll;
mod search;

#[cfg(test)]
mod tests;

pub use fetcher::spawn_fetch;
pub use hooks::{ErrorHook, TracingErrorHook};
pub use pagination::{Pagination, MAX_PAGE_SIZE};
pub use scroll::{ScrollMonitor, ViewportProximity, DEFAULT_SCROLL_THRESHOLD};
pub use search::SearchState;

use crate::catalog::{Card, CardPage, CardQuery, FetchError};

/// A request the caller should execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub query: CardQuery,
}

/// A finished request, tagged with the sequence number it was issued with
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub seq: u64,
    pub result: Result<CardPage, FetchError>,
}

/// Inputs to the state machine
#[derive(Debug, Clone)]
pub enum Action {
    /// Initial load of page 1 with no filter
    Start,
    InsertChar(char),
    DeleteChar,
    SetTerm(String),
    /// Empty the search box without re-querying
    ClearTerm,
    /// Submit the typed term (no-op if unchanged)
    Submit,
    /// Re-fetch page 1 of the submitted term
    Reload,
    /// The viewport came within the scroll threshold of the end
    NearBottom,
    FetchSettled(FetchOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading { seq: u64, query: CardQuery },
}

/// Status line shown alongside the results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseStatus {
    Loading,
    NoCardsFound,
}

impl BrowseStatus {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Loading => "Loading…",
            Self::NoCardsFound => "No Cards Found",
        }
    }
}

pub struct BrowseSession {
    results: Vec<Card>,
    pagination: Pagination,
    search: SearchState,
    phase: Phase,
    /// Last sequence number handed out (0 = nothing issued yet)
    last_seq: u64,
    /// A page came back (possibly empty) since the last fresh search.
    /// Failures leave it unset so they never read as "no cards".
    answered: bool,
    error_hook: Box<dyn ErrorHook>,
}

impl std::fmt::Debug for BrowseSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowseSession")
            .field("results", &self.results.len())
            .field("pagination", &self.pagination)
            .field("search", &self.search)
            .field("phase", &self.phase)
            .field("last_seq", &self.last_seq)
            .finish()
    }
}

impl BrowseSession {
    pub fn new(page_size: u32) -> Self {
        Self::with_error_hook(page_size, TracingErrorHook)
    }

    /// Session that reports fetch failures to `hook`
    pub fn with_error_hook(page_size: u32, hook: impl ErrorHook + 'static) -> Self {
        Self {
            results: Vec::new(),
            pagination: Pagination::new(page_size),
            search: SearchState::new(),
            phase: Phase::Idle,
            last_seq: 0,
            answered: false,
            error_hook: Box::new(hook),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action) -> Option<FetchRequest> {
        match action {
            Action::Start => {
                if self.last_seq > 0 {
                    return None;
                }
                Some(self.begin_fresh())
            }
            Action::InsertChar(c) => {
                self.search.insert_char(c);
                None
            }
            Action::DeleteChar => {
                self.search.delete_char();
                None
            }
            Action::SetTerm(term) => {
                self.search.set_term(term);
                None
            }
            Action::ClearTerm => {
                self.search.clear();
                None
            }
            Action::Submit => {
                let term = self.search.submit()?;
                tracing::info!("Searching for '{}'", term);
                Some(self.begin_fresh())
            }
            Action::Reload => {
                tracing::info!("Reloading results");
                Some(self.begin_fresh())
            }
            Action::NearBottom => self.load_more(),
            Action::FetchSettled(outcome) => {
                self.settle(outcome);
                None
            }
        }
    }

    /// Clear everything and request page 1 of the submitted term
    fn begin_fresh(&mut self) -> FetchRequest {
        self.results.clear();
        self.pagination.reset();
        self.answered = false;
        self.issue(1)
    }

    fn load_more(&mut self) -> Option<FetchRequest> {
        if self.is_loading() || !self.pagination.may_have_more() {
            return None;
        }
        let page = self.pagination.next_page();
        tracing::debug!("Loading page {}", page);
        Some(self.issue(page))
    }

    fn issue(&mut self, page: u32) -> FetchRequest {
        self.last_seq += 1;
        let query = CardQuery::new(
            page,
            self.pagination.page_size(),
            self.search.submitted(),
        );
        self.phase = Phase::Loading {
            seq: self.last_seq,
            query: query.clone(),
        };
        FetchRequest {
            seq: self.last_seq,
            query,
        }
    }

    fn settle(&mut self, outcome: FetchOutcome) {
        let query = match &self.phase {
            Phase::Loading { seq, query } if *seq == outcome.seq => query.clone(),
            _ => {
                tracing::debug!(
                    "Discarding stale response (seq {}, latest {})",
                    outcome.seq,
                    self.last_seq
                );
                return;
            }
        };

        self.phase = Phase::Idle;

        match outcome.result {
            Ok(page) => {
                self.answered = true;
                let len = page.cards.len();
                if len == 0 {
                    tracing::info!("No more cards to load");
                } else if query.page == 1 {
                    self.results = page.cards;
                } else {
                    self.results.extend(page.cards);
                }
                self.pagination
                    .record(query.page, len, page.total_count, page.count);
                tracing::debug!(
                    "Page {} settled: {} cards, {} loaded",
                    query.page,
                    len,
                    self.results.len()
                );
            }
            Err(err) => self.error_hook.report(&query, &err),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn results(&self) -> &[Card] {
        &self.results
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    pub fn status(&self) -> Option<BrowseStatus> {
        if self.is_loading() {
            Some(BrowseStatus::Loading)
        } else if self.answered && self.results.is_empty() {
            Some(BrowseStatus::NoCardsFound)
        } else {
            None
        }
    }

    /// "{loaded} / {total}", with "?" while the total is unknown
    pub fn counter_text(&self) -> String {
        match self.pagination.total_count() {
            Some(total) => format!("{} / {}", self.results.len(), total),
            None => format!("{} / ?", self.results.len()),
        }
    }
}
