// Browse session tests
//
// Drive the state machine with synthetic actions and outcomes; no network.

use super::*;
use crate::catalog::Card;
use std::sync::{Arc, Mutex};

fn cards(prefix: &str, n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card {
            name: format!("{} {}", prefix, i),
            image_url: None,
            text: None,
            type_line: "Instant".to_string(),
        })
        .collect()
}

fn ok(seq: u64, cards: Vec<Card>) -> Action {
    Action::FetchSettled(FetchOutcome {
        seq,
        result: Ok(CardPage {
            cards,
            total_count: None,
            count: None,
        }),
    })
}

fn ok_with_total(seq: u64, cards: Vec<Card>, total: u64) -> Action {
    let count = cards.len() as u64;
    Action::FetchSettled(FetchOutcome {
        seq,
        result: Ok(CardPage {
            cards,
            total_count: Some(total),
            count: Some(count),
        }),
    })
}

fn failed(seq: u64) -> Action {
    Action::FetchSettled(FetchOutcome {
        seq,
        result: Err(FetchError::Transport("connection reset".to_string())),
    })
}

fn submit(session: &mut BrowseSession, term: &str) -> Option<FetchRequest> {
    session.dispatch(Action::SetTerm(term.to_string()));
    session.dispatch(Action::Submit)
}

/// Session with page 1 (a full page of `page_size`) already loaded
fn loaded_session(page_size: u32) -> BrowseSession {
    let mut session = BrowseSession::new(page_size);
    let req = session.dispatch(Action::Start).unwrap();
    session.dispatch(ok(req.seq, cards("Card", page_size as usize)));
    session
}

#[derive(Clone, Default)]
struct RecordingHook {
    reports: Arc<Mutex<Vec<(CardQuery, FetchError)>>>,
}

impl ErrorHook for RecordingHook {
    fn report(&self, query: &CardQuery, error: &FetchError) {
        self.reports
            .lock()
            .unwrap()
            .push((query.clone(), error.clone()));
    }
}

struct Distance(usize);

impl ViewportProximity for Distance {
    fn distance_to_bottom(&self) -> usize {
        self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Initial load
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn initial_load_requests_first_page_without_filter() {
    let mut session = BrowseSession::new(20);
    let req = session.dispatch(Action::Start).expect("initial request");

    assert_eq!(req.query, CardQuery::new(1, 20, ""));
    assert_eq!(
        req.query.to_url("https://api.example.com/v1").unwrap().as_str(),
        "https://api.example.com/v1/cards/?page=1&pageSize=20&name="
    );
    assert!(session.is_loading());
    assert_eq!(session.status(), Some(BrowseStatus::Loading));

    session.dispatch(ok(req.seq, cards("Card", 20)));
    assert_eq!(session.results().len(), 20);
    assert!(!session.is_loading());
    assert_eq!(session.status(), None);
}

#[test]
fn start_only_fires_once() {
    let mut session = BrowseSession::new(20);
    assert!(session.dispatch(Action::Start).is_some());
    assert!(session.dispatch(Action::Start).is_none());
}

#[test]
fn header_counts_feed_the_counter() {
    let mut session = BrowseSession::new(20);
    assert_eq!(session.counter_text(), "0 / ?");

    let req = session.dispatch(Action::Start).unwrap();
    session.dispatch(ok_with_total(req.seq, cards("Card", 20), 57));
    assert_eq!(session.counter_text(), "20 / 57");
    assert_eq!(session.pagination().page_count(), Some(20));
}

// ─────────────────────────────────────────────────────────────────────────
// Load more
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn load_more_fetches_next_page_and_concatenates() {
    let mut session = loaded_session(20);
    let first_page: Vec<String> = session.results().iter().map(|c| c.name.clone()).collect();

    let req = session.dispatch(Action::NearBottom).expect("page 2 request");
    assert_eq!(req.query.page, 2);
    assert!(session.is_loading());

    session.dispatch(ok(req.seq, cards("More", 20)));
    assert!(!session.is_loading());
    assert_eq!(session.results().len(), 40);
    assert_eq!(session.pagination().current_page(), 2);

    let names: Vec<String> = session.results().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names[..20], first_page[..]);
    assert_eq!(names[20], "More 0");
    assert_eq!(names[39], "More 19");
}

#[test]
fn load_more_while_loading_is_noop() {
    let mut session = loaded_session(20);
    let req = session.dispatch(Action::NearBottom).unwrap();
    let seq_before = session.last_seq();

    assert!(session.dispatch(Action::NearBottom).is_none());
    assert!(session.dispatch(Action::NearBottom).is_none());
    assert_eq!(session.last_seq(), seq_before);
    assert_eq!(
        session.phase(),
        &Phase::Loading {
            seq: req.seq,
            query: req.query.clone()
        }
    );
}

#[test]
fn short_page_suppresses_further_loads() {
    let mut session = BrowseSession::new(20);
    let req = session.dispatch(Action::Start).unwrap();
    session.dispatch(ok(req.seq, cards("Card", 7)));

    assert_eq!(session.results().len(), 7);
    assert!(session.dispatch(Action::NearBottom).is_none());
}

#[test]
fn empty_page_keeps_results_and_clears_loading() {
    let mut session = loaded_session(20);
    let req = session.dispatch(Action::NearBottom).unwrap();
    session.dispatch(ok(req.seq, Vec::new()));

    assert_eq!(session.results().len(), 20);
    assert!(!session.is_loading());
    assert_eq!(session.pagination().current_page(), 1);
    assert!(session.dispatch(Action::NearBottom).is_none());
    assert_eq!(session.status(), None);
}

#[test]
fn failed_load_more_clears_loading_and_retries_same_page() {
    let hook = RecordingHook::default();
    let mut session = BrowseSession::with_error_hook(20, hook.clone());
    let req = session.dispatch(Action::Start).unwrap();
    session.dispatch(ok(req.seq, cards("Card", 20)));

    let req = session.dispatch(Action::NearBottom).unwrap();
    assert_eq!(req.query.page, 2);
    session.dispatch(failed(req.seq));

    assert!(!session.is_loading());
    assert_eq!(session.results().len(), 20);
    assert_eq!(session.pagination().current_page(), 1);

    let reports = hook.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0.page, 2);
    assert!(matches!(reports[0].1, FetchError::Transport(_)));
    drop(reports);

    let retry = session.dispatch(Action::NearBottom).expect("retry");
    assert_eq!(retry.query.page, 2);
}

#[test]
fn failed_initial_load_shows_no_status() {
    let mut session = BrowseSession::new(20);
    let req = session.dispatch(Action::Start).unwrap();
    session.dispatch(Action::FetchSettled(FetchOutcome {
        seq: req.seq,
        result: Err(FetchError::Decode("expected value".to_string())),
    }));

    assert!(!session.is_loading());
    assert!(session.results().is_empty());
    assert_eq!(session.status(), None);
}

#[test]
fn failed_search_after_results_shows_no_status() {
    let mut session = loaded_session(20);
    let req = submit(&mut session, "Bolt").unwrap();
    session.dispatch(failed(req.seq));

    assert!(session.results().is_empty());
    assert_eq!(session.status(), None);

    // A later empty answer is still reported
    let req = session.dispatch(Action::Reload).unwrap();
    session.dispatch(ok(req.seq, Vec::new()));
    assert_eq!(session.status(), Some(BrowseStatus::NoCardsFound));
}

// ─────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn search_replaces_results_with_fresh_first_page() {
    let mut session = loaded_session(20);
    let req = session.dispatch(Action::NearBottom).unwrap();
    session.dispatch(ok(req.seq, cards("More", 20)));
    assert_eq!(session.results().len(), 40);

    let req = submit(&mut session, "Bolt").expect("search request");
    assert_eq!(req.query, CardQuery::new(1, 20, "Bolt"));
    assert!(session.results().is_empty());
    assert_eq!(session.pagination().current_page(), 1);
    assert_eq!(session.counter_text(), "0 / ?");

    session.dispatch(ok(req.seq, cards("Bolt", 3)));
    assert_eq!(session.results().len(), 3);
    assert_eq!(session.results()[0].name, "Bolt 0");
}

#[test]
fn identical_submission_does_not_refetch() {
    let mut session = loaded_session(20);
    let req = submit(&mut session, "Bolt").unwrap();
    session.dispatch(ok(req.seq, cards("Bolt", 3)));
    let seq = session.last_seq();

    assert!(submit(&mut session, "Bolt").is_none());
    assert!(submit(&mut session, "  Bolt  ").is_none());
    assert_eq!(session.last_seq(), seq);
    assert_eq!(session.results().len(), 3);
}

#[test]
fn typing_does_not_fetch() {
    let mut session = loaded_session(20);
    let seq = session.last_seq();
    for c in "Elf".chars() {
        assert!(session.dispatch(Action::InsertChar(c)).is_none());
    }
    assert!(session.dispatch(Action::DeleteChar).is_none());
    assert_eq!(session.search().term(), "El");
    assert_eq!(session.last_seq(), seq);
}

#[test]
fn clearing_term_waits_for_submit() {
    let mut session = loaded_session(20);
    let req = submit(&mut session, "Bolt").unwrap();
    session.dispatch(ok(req.seq, cards("Bolt", 3)));

    assert!(session.dispatch(Action::ClearTerm).is_none());
    assert_eq!(session.search().term(), "");
    assert_eq!(session.search().submitted(), "Bolt");
    assert_eq!(session.results().len(), 3);

    let req = session.dispatch(Action::Submit).expect("unfiltered request");
    assert_eq!(req.query.name, "");
}

#[test]
fn zero_result_search_shows_no_cards_found() {
    let mut session = loaded_session(20);
    let req = submit(&mut session, "Nonexistent").unwrap();
    assert_eq!(session.status(), Some(BrowseStatus::Loading));

    session.dispatch(ok_with_total(req.seq, Vec::new(), 0));
    assert_eq!(session.status(), Some(BrowseStatus::NoCardsFound));
    assert_eq!(session.status().unwrap().message(), "No Cards Found");
    assert_eq!(session.counter_text(), "0 / 0");
}

#[test]
fn reload_refetches_first_page_of_submitted_term() {
    let mut session = loaded_session(20);
    let req = submit(&mut session, "Elf").unwrap();
    session.dispatch(ok(req.seq, cards("Elf", 20)));
    session.dispatch(Action::SetTerm("Dragon".to_string()));

    let req = session.dispatch(Action::Reload).expect("reload request");
    assert_eq!(req.query, CardQuery::new(1, 20, "Elf"));
    assert!(session.results().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────
// Stale responses
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn stale_response_does_not_overwrite_newer_search() {
    let mut session = BrowseSession::new(20);
    let initial = session.dispatch(Action::Start).unwrap();
    let bolt = submit(&mut session, "Bolt").unwrap();
    assert!(bolt.seq > initial.seq);

    session.dispatch(ok(bolt.seq, cards("Bolt", 4)));
    session.dispatch(ok(initial.seq, cards("Card", 20)));

    assert_eq!(session.results().len(), 4);
    assert!(session.results().iter().all(|c| c.name.starts_with("Bolt")));
    assert!(!session.is_loading());
}

#[test]
fn stale_response_does_not_end_current_loading() {
    let mut session = BrowseSession::new(20);
    let initial = session.dispatch(Action::Start).unwrap();
    let bolt = submit(&mut session, "Bolt").unwrap();

    session.dispatch(ok(initial.seq, cards("Card", 20)));
    assert!(session.is_loading());
    assert!(session.results().is_empty());

    session.dispatch(ok(bolt.seq, cards("Bolt", 2)));
    assert!(!session.is_loading());
    assert_eq!(session.results().len(), 2);
}

#[test]
fn stale_load_more_is_not_appended_to_new_search() {
    let mut session = loaded_session(20);
    let more = session.dispatch(Action::NearBottom).unwrap();
    assert_eq!(more.query.page, 2);

    let bolt = submit(&mut session, "Bolt").unwrap();
    session.dispatch(ok(bolt.seq, cards("Bolt", 20)));
    assert_eq!(session.pagination().current_page(), 1);

    // Page 2 of the old listing lands last
    session.dispatch(ok(more.seq, cards("More", 20)));
    assert_eq!(session.results().len(), 20);
    assert!(session.results().iter().all(|c| c.name.starts_with("Bolt")));
    assert_eq!(session.pagination().current_page(), 1);
    assert!(!session.is_loading());

    let next = session.dispatch(Action::NearBottom).expect("next page");
    assert_eq!(next.query, CardQuery::new(2, 20, "Bolt"));
}

#[test]
fn stale_failure_is_not_reported() {
    let hook = RecordingHook::default();
    let mut session = BrowseSession::with_error_hook(20, hook.clone());
    let initial = session.dispatch(Action::Start).unwrap();
    let _bolt = submit(&mut session, "Bolt").unwrap();

    session.dispatch(failed(initial.seq));
    assert!(hook.reports.lock().unwrap().is_empty());
    assert!(session.is_loading());
}

// ─────────────────────────────────────────────────────────────────────────
// Scroll monitor
// ─────────────────────────────────────────────────────────────────────────

#[test]
fn scroll_near_bottom_triggers_next_page() {
    let monitor = ScrollMonitor::new(12);
    let mut session = loaded_session(20);

    assert!(monitor.observe(&Distance(40), &mut session).is_none());

    let req = monitor
        .observe(&Distance(5), &mut session)
        .expect("load more");
    assert_eq!(req.query.page, 2);
    assert!(session.is_loading());

    // Still near the bottom while loading: nothing new
    assert!(monitor.observe(&Distance(0), &mut session).is_none());

    session.dispatch(ok(req.seq, cards("More", 20)));
    assert!(!session.is_loading());
    assert_eq!(session.results().len(), 40);
}

#[test]
fn scroll_after_last_page_is_ignored() {
    let monitor = ScrollMonitor::default();
    let mut session = BrowseSession::new(20);
    let req = session.dispatch(Action::Start).unwrap();
    session.dispatch(ok(req.seq, cards("Card", 12)));

    assert!(monitor.observe(&Distance(0), &mut session).is_none());
}
