//! Session lifecycle tests
//!
//! Validates the controller's state machine across debounce windows:
//! trailing-edge ordering, clear-while-armed, history bounds, and the
//! documented pagination heuristic.

use atrium::{
    sample_store, InMemoryRecordStore, ManualClock, OptionsPatch, Record, SearchSession,
    DEBOUNCE_MILLIS, RECENT_SEARCH_CAP,
};
use std::sync::Arc;

// ============================================================================
// Test Helpers
// ============================================================================

fn new_session() -> (SearchSession, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let session = SearchSession::builder(Arc::new(sample_store()))
        .clock(clock.clone())
        .build();
    (session, clock)
}

fn user(id: &str, name: &str) -> Record {
    Record::User {
        id: id.into(),
        name: name.into(),
        email: format!("{id}@example.com"),
        role: "analyst".into(),
        department: "Ventas".into(),
    }
}

// ============================================================================
// Debounce Ordering
// ============================================================================

/// Rapid keystrokes execute only the final query's parameters
#[test]
fn test_trailing_edge_executes_last_keystroke_only() {
    let (mut session, clock) = new_session();

    for (step, partial) in ["p", "po", "por", "portal"].iter().enumerate() {
        clock.advance(step as u64 * 10);
        session.search(*partial);
        assert!(!session.state().is_loading, "no flicker while typing");
    }

    clock.advance(DEBOUNCE_MILLIS);
    assert!(session.poll());

    let state = session.state();
    assert_eq!(state.query, "portal");
    assert!(!state.results.is_empty());
    // Only the executed query is recorded
    assert_eq!(state.recent_searches.to_vec(), vec!["portal"]);
}

/// Clearing while a debounced search is armed leaves the session settled
#[test]
fn test_clear_while_armed_never_repopulates() {
    let (mut session, clock) = new_session();

    session.search("portal");
    clock.advance(DEBOUNCE_MILLIS / 2);
    session.clear_search();

    // Poll far past the original deadline
    clock.advance(DEBOUNCE_MILLIS * 4);
    assert!(!session.poll());

    let state = session.state();
    assert_eq!(state.query, "");
    assert!(state.results.is_empty());
    assert!(!state.is_loading);
    assert!(!state.has_more);
}

// ============================================================================
// History Bounds
// ============================================================================

/// History never exceeds the cap and never repeats a literal string
#[test]
fn test_history_is_bounded_and_unique() {
    let (mut session, clock) = new_session();

    // "de" matches demo data, so every search settles successfully
    for i in 0..(RECENT_SEARCH_CAP + 5) {
        session.search(format!("de portal{i}"));
        clock.advance(DEBOUNCE_MILLIS);
        session.poll();
    }
    // And one exact repeat
    session.search("de portal0");
    clock.advance(DEBOUNCE_MILLIS);
    session.poll();

    let history = session.state().recent_searches.to_vec();
    assert!(history.len() <= RECENT_SEARCH_CAP);

    let mut deduped = history.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), history.len(), "history repeats a string");

    // The exact repeat moved to the front instead of duplicating
    assert_eq!(history[0], "de portal0");
}

// ============================================================================
// Pagination Heuristic
// ============================================================================

/// The full-page heuristic false-positives on an exact multiple of limit
#[test]
fn test_has_more_false_positive_is_preserved() {
    // Exactly 4 matching users with limit 2: the second page fills the
    // limit, so has_more stays true even though the set is exhausted
    let store = InMemoryRecordStore::with_records([
        user("u-1", "Nora Vidal"),
        user("u-2", "Iris Vidal"),
        user("u-3", "Pau Vidal"),
        user("u-4", "Gal Vidal"),
    ]);
    let clock = Arc::new(ManualClock::new());
    let mut session = SearchSession::builder(Arc::new(store))
        .clock(clock.clone())
        .build();
    session.update_options(OptionsPatch::limit(2));

    session.search("vidal");
    clock.advance(DEBOUNCE_MILLIS);
    session.poll();
    assert_eq!(session.state().results.len(), 2);
    assert!(session.state().has_more);

    assert!(session.load_more());
    assert_eq!(session.state().results.len(), 4);
    assert_eq!(session.state().total_results, 4);
    // Documented imprecision: the page was full, so the flag stays up
    assert!(session.state().has_more);

    // The next load fetches an empty page and the flag finally drops
    assert!(session.load_more());
    assert_eq!(session.state().results.len(), 4);
    assert!(!session.state().has_more);
}

/// Options changes re-run an active query under the same debounce contract
#[test]
fn test_options_change_reruns_active_query() {
    let (mut session, clock) = new_session();

    session.search("de");
    clock.advance(DEBOUNCE_MILLIS);
    session.poll();
    let full_count = session.state().results.len();
    assert!(full_count > 2);

    session.update_options(OptionsPatch::limit(2));
    assert!(session.is_search_pending());
    clock.advance(DEBOUNCE_MILLIS);
    session.poll();

    assert_eq!(session.state().results.len(), 2);
    assert!(session.state().has_more);
}
