//! Search session controller
//!
//! Owns the reactive session state and drives the pipeline through an
//! explicit state machine:
//!
//! ```text
//! Idle ──search(q)──▶ Debouncing ──poll() past deadline──▶ Loading
//!                        ▲  │                                 │
//!   update_filters/      │  └── search("") / clear_search     │ pipeline
//!   update_options ──────┘        settles Idle immediately    ▼
//!                                                          Settled
//!                                        (results on success, error string
//!                                         on failure; loading always off)
//! ```
//!
//! `load_more` runs the pipeline immediately (no debounce) and appends the
//! next page; it is a no-op unless `has_more` is set and nothing is
//! loading.
//!
//! Failure semantics: pipeline errors never escape as panics or `Err` -
//! they are logged, converted to a human-readable `error` field, and
//! loading is cleared on every exit path. A load-more failure keeps the
//! already-shown results.

use crate::clock::{Clock, SystemClock};
use crate::debounce::Debouncer;
use crate::history::RecentSearches;
use atrium_core::{FilterPatch, OptionsPatch, SearchFilters, SearchOptions, SearchResult};
use atrium_search::run_query_at;
use atrium_store::{KeyValueStore, RecordStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Quiet period between the last keystroke and pipeline execution
pub const DEBOUNCE_MILLIS: u64 = 300;

// ============================================================================
// SessionState
// ============================================================================

/// The observable state of one search session
///
/// Mutated only by the controller's transition methods; callers read it
/// through [`SearchSession::state`].
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Current query text (updated synchronously on every `search` call)
    pub query: String,
    /// Ranked result page(s); cumulative across `load_more`
    pub results: Vec<SearchResult>,
    /// True only while the pipeline is executing
    pub is_loading: bool,
    /// Human-readable failure description, cleared on the next run
    pub error: Option<String>,
    /// Total matches across the whole ranked sequence
    pub total_results: usize,
    /// Full-page heuristic from the last fetched page
    pub has_more: bool,
    /// Active candidate filters
    pub filters: SearchFilters,
    /// Active ranking/pagination options
    pub options: SearchOptions,
    /// Bounded most-recent-first query history
    pub recent_searches: RecentSearches,
    /// Reserved for query suggestions; always empty in this version
    pub suggestions: Vec<String>,
}

/// Deferred search parameters: only the last scheduled set ever executes
#[derive(Debug, Clone)]
struct PendingSearch {
    query: String,
}

// ============================================================================
// SessionBuilder
// ============================================================================

/// Builder for [`SearchSession`]
///
/// The record store is the one required collaborator; clock, debounce
/// delay, and history persistence have production defaults.
pub struct SessionBuilder {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    debounce_millis: u64,
    history_kv: Option<Arc<dyn KeyValueStore>>,
}

impl SessionBuilder {
    /// Start building a session over the given record store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        SessionBuilder {
            store,
            clock: Arc::new(SystemClock::new()),
            debounce_millis: DEBOUNCE_MILLIS,
            history_kv: None,
        }
    }

    /// Builder: inject a time source (tests use a manual clock)
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Builder: override the debounce quiet period
    pub fn debounce_millis(mut self, millis: u64) -> Self {
        self.debounce_millis = millis;
        self
    }

    /// Builder: persist recent-search history through this collaborator
    pub fn history(mut self, kv: Arc<dyn KeyValueStore>) -> Self {
        self.history_kv = Some(kv);
        self
    }

    /// Build the session, loading persisted history when wired
    ///
    /// A corrupt or unreadable history is logged and replaced with an
    /// empty one - it never blocks session start.
    pub fn build(self) -> SearchSession {
        let mut state = SessionState::default();

        if let Some(kv) = &self.history_kv {
            match RecentSearches::load(kv.as_ref()) {
                Ok(history) => state.recent_searches = history,
                Err(err) => warn!(error = %err, "ignoring persisted search history"),
            }
        }

        SearchSession {
            store: self.store,
            clock: self.clock,
            history_kv: self.history_kv,
            debouncer: Debouncer::new(self.debounce_millis),
            page_offset: state.options.offset,
            state,
        }
    }
}

// ============================================================================
// SearchSession
// ============================================================================

/// Debounced, stateful search session over an injected record store
///
/// # Example
///
/// ```
/// use atrium_session::{ManualClock, SearchSession};
/// use atrium_store::sample_store;
/// use std::sync::Arc;
///
/// let clock = Arc::new(ManualClock::new());
/// let mut session = SearchSession::builder(Arc::new(sample_store()))
///     .clock(clock.clone())
///     .build();
///
/// session.search("alpha");
/// clock.advance(300);
/// session.poll();
///
/// assert_eq!(session.state().results.len(), 1);
/// ```
pub struct SearchSession {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    history_kv: Option<Arc<dyn KeyValueStore>>,
    debouncer: Debouncer<PendingSearch>,
    /// Offset of the most recently fetched page
    page_offset: usize,
    state: SessionState,
}

impl SearchSession {
    /// Start building a session over the given record store
    pub fn builder(store: Arc<dyn RecordStore>) -> SessionBuilder {
        SessionBuilder::new(store)
    }

    /// The session's observable state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// True if a debounced search is waiting for its quiet period
    pub fn is_search_pending(&self) -> bool {
        self.debouncer.is_armed()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Update the query and arm the debounced search
    ///
    /// The query field updates synchronously; the pipeline runs only after
    /// the quiet period elapses (see [`poll`](Self::poll)). A burst of
    /// calls executes the last one only. Loading is NOT set here, so rapid
    /// keystrokes show no loading flicker.
    ///
    /// An empty (or whitespace-only) query settles the session immediately:
    /// results cleared, nothing pending, nothing loading.
    pub fn search(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.state.query = query.clone();

        if query.trim().is_empty() {
            // A pending run from the previous query must never repopulate
            // the cleared box
            self.debouncer.cancel();
            self.settle_empty();
            return;
        }

        let now = self.clock.now_millis();
        self.debouncer.schedule(now, PendingSearch { query });
    }

    /// Drive the debouncer; execute the pending search once due
    ///
    /// The host's event loop calls this with whatever cadence it has (a
    /// timer tick, a frame). Returns true if a deferred search executed.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_millis();
        let Some(pending) = self.debouncer.fire_due(now) else {
            return false;
        };

        // The box may have been cleared while the timer was armed
        if self.state.query.trim().is_empty() {
            return false;
        }

        let offset = self.state.options.offset;
        self.execute(&pending.query, offset, false);
        true
    }

    /// Merge a partial filter update; re-arm the search if a query is live
    pub fn update_filters(&mut self, patch: FilterPatch) {
        self.state.filters.merge(patch);
        self.rearm_if_active();
    }

    /// Merge a partial options update; re-arm the search if a query is live
    pub fn update_options(&mut self, patch: OptionsPatch) {
        self.state.options.merge(patch);
        self.rearm_if_active();
    }

    /// Reset query, results, totals, and error to their initial values
    ///
    /// Filters, options, and recent searches are untouched. Cancels any
    /// armed debounce.
    pub fn clear_search(&mut self) {
        self.debouncer.cancel();
        self.state.query.clear();
        self.settle_empty();
    }

    /// Fetch the next page and append it to the current results
    ///
    /// Only valid while `has_more` is set and nothing is loading; any
    /// other call is a no-op without a pipeline run. Returns true if a
    /// page was fetched.
    pub fn load_more(&mut self) -> bool {
        if !self.state.has_more || self.state.is_loading {
            return false;
        }
        if self.state.query.trim().is_empty() {
            return false;
        }

        let query = self.state.query.clone();
        let next_offset = self.page_offset + self.state.options.limit;
        self.execute(&query, next_offset, true);
        true
    }

    // ========================================================================
    // Pipeline Execution
    // ========================================================================

    fn execute(&mut self, query: &str, offset: usize, append: bool) {
        self.state.is_loading = true;
        self.state.error = None;
        debug!(query, offset, append, "running search pipeline");

        let outcome = run_query_at(
            query,
            self.store.as_ref(),
            &self.state.filters,
            &self.state.options,
            offset,
        );

        match outcome {
            Ok(page) => {
                self.state.total_results = page.total_matches;
                self.state.has_more = page.has_more;
                self.page_offset = offset;

                if append {
                    self.state.results.extend(page.results);
                } else {
                    self.state.results = page.results;
                    self.record_recent(query);
                }
            }
            Err(err) => {
                warn!(error = %err, query, append, "search pipeline failed");
                self.state.error = Some(format!("Search failed: {err}"));

                if !append {
                    self.state.results.clear();
                    self.state.total_results = 0;
                    self.state.has_more = false;
                }
                // A load-more failure keeps the already-shown results
            }
        }

        // Loading never sticks, success or failure
        self.state.is_loading = false;
    }

    fn rearm_if_active(&mut self) {
        if self.state.query.trim().is_empty() {
            return;
        }
        let now = self.clock.now_millis();
        self.debouncer.schedule(
            now,
            PendingSearch {
                query: self.state.query.clone(),
            },
        );
    }

    fn settle_empty(&mut self) {
        self.state.results.clear();
        self.state.total_results = 0;
        self.state.has_more = false;
        self.state.error = None;
        self.state.is_loading = false;
        self.page_offset = self.state.options.offset;
    }

    fn record_recent(&mut self, query: &str) {
        self.state.recent_searches.push(query);

        if let Some(kv) = &self.history_kv {
            if let Err(err) = self.state.recent_searches.save(kv.as_ref()) {
                // History persistence is best-effort
                warn!(error = %err, "failed to persist search history");
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use atrium_core::{EntityType, Record, Result, TypeFilter};
    use atrium_store::{sample_store, InMemoryKeyValue};

    // ========================================
    // Test Helpers
    // ========================================

    fn session_with_clock() -> (SearchSession, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let session = SearchSession::builder(Arc::new(sample_store()))
            .clock(clock.clone())
            .build();
        (session, clock)
    }

    fn settle(session: &mut SearchSession, clock: &ManualClock) {
        clock.advance(DEBOUNCE_MILLIS);
        session.poll();
    }

    /// Store that fails every lookup
    struct FailingStore;

    impl RecordStore for FailingStore {
        fn records(&self, _ty: EntityType) -> Result<Vec<Record>> {
            Err(atrium_core::Error::Store("backend offline".into()))
        }
    }

    // ========================================
    // Debounce Tests
    // ========================================

    #[test]
    fn test_search_updates_query_synchronously_without_loading() {
        let (mut session, _clock) = session_with_clock();
        session.search("alpha");

        assert_eq!(session.state().query, "alpha");
        assert!(!session.state().is_loading);
        assert!(session.state().results.is_empty());
        assert!(session.is_search_pending());
    }

    #[test]
    fn test_poll_before_quiet_period_does_nothing() {
        let (mut session, clock) = session_with_clock();
        session.search("alpha");

        clock.advance(DEBOUNCE_MILLIS - 1);
        assert!(!session.poll());
        assert!(session.state().results.is_empty());
    }

    #[test]
    fn test_only_last_burst_query_executes() {
        let (mut session, clock) = session_with_clock();
        session.search("alp");
        clock.advance(100);
        session.search("alph");
        clock.advance(100);
        session.search("alpha");

        // First deadline would have passed; trailing edge moved with the burst
        clock.advance(DEBOUNCE_MILLIS - 1);
        assert!(!session.poll());

        clock.advance(1);
        assert!(session.poll());
        assert_eq!(session.state().results.len(), 1);
        assert_eq!(session.state().results[0].id, "p-1001");
        // Only the executed query entered the history
        assert_eq!(session.state().recent_searches.to_vec(), vec!["alpha"]);
    }

    // ========================================
    // Empty-Query / Clear Tests
    // ========================================

    #[test]
    fn test_empty_query_settles_immediately_despite_pending_search() {
        let (mut session, clock) = session_with_clock();
        session.search("alpha");
        session.search("");

        assert!(!session.is_search_pending());
        assert!(session.state().results.is_empty());
        assert!(!session.state().has_more);
        assert!(!session.state().is_loading);

        // Even if the host keeps polling past the old deadline
        clock.advance(DEBOUNCE_MILLIS * 2);
        assert!(!session.poll());
        assert!(session.state().results.is_empty());
    }

    #[test]
    fn test_clear_search_resets_results_but_keeps_filters_and_history() {
        let (mut session, clock) = session_with_clock();
        session.update_filters(FilterPatch::entity_types(vec![TypeFilter::Only(
            EntityType::Project,
        )]));
        session.search("alpha");
        settle(&mut session, &clock);
        assert!(!session.state().results.is_empty());

        session.clear_search();

        assert_eq!(session.state().query, "");
        assert!(session.state().results.is_empty());
        assert_eq!(session.state().total_results, 0);
        assert!(session.state().error.is_none());
        // Untouched by clear
        assert_eq!(
            session.state().filters.entity_types,
            vec![TypeFilter::Only(EntityType::Project)]
        );
        assert_eq!(session.state().recent_searches.to_vec(), vec!["alpha"]);
    }

    // ========================================
    // Filter / Option Update Tests
    // ========================================

    #[test]
    fn test_update_filters_reruns_active_query_under_new_scope() {
        let (mut session, clock) = session_with_clock();
        session.search("2024");
        settle(&mut session, &clock);
        let before: Vec<EntityType> = session
            .state()
            .results
            .iter()
            .map(|r| r.entity_type)
            .collect();
        assert!(before.contains(&EntityType::Task));

        session.update_filters(FilterPatch::entity_types(vec![TypeFilter::Only(
            EntityType::Invoice,
        )]));
        // Same debounce contract as typing
        assert!(session.is_search_pending());
        settle(&mut session, &clock);

        assert!(!session.state().results.is_empty());
        assert!(session
            .state()
            .results
            .iter()
            .all(|r| r.entity_type == EntityType::Invoice));
    }

    #[test]
    fn test_update_filters_without_query_stays_idle() {
        let (mut session, _clock) = session_with_clock();
        session.update_filters(FilterPatch::entity_types(vec![TypeFilter::All]));
        assert!(!session.is_search_pending());
    }

    // ========================================
    // Load-More Tests
    // ========================================

    #[test]
    fn test_load_more_appends_next_page() {
        let (mut session, clock) = session_with_clock();
        session.update_options(OptionsPatch::limit(2));
        session.search("de");
        settle(&mut session, &clock);

        let first_page: Vec<String> =
            session.state().results.iter().map(|r| r.id.clone()).collect();
        assert_eq!(first_page.len(), 2);
        assert!(session.state().has_more);

        assert!(session.load_more());
        assert_eq!(session.state().results.len(), 4);
        // First page stays in place, second page appended after it
        let ids: Vec<String> = session.state().results.iter().map(|r| r.id.clone()).collect();
        assert_eq!(&ids[..2], &first_page[..]);
    }

    #[test]
    fn test_load_more_without_has_more_is_a_noop() {
        let (mut session, clock) = session_with_clock();
        session.search("alpha");
        settle(&mut session, &clock);
        assert!(!session.state().has_more);

        let before = session.state().clone();
        assert!(!session.load_more());
        assert_eq!(session.state().results.len(), before.results.len());
        assert_eq!(session.state().total_results, before.total_results);
    }

    // ========================================
    // Failure Tests
    // ========================================

    #[test]
    fn test_pipeline_failure_surfaces_as_error_state() {
        let clock = Arc::new(ManualClock::new());
        let mut session = SearchSession::builder(Arc::new(FailingStore))
            .clock(clock.clone())
            .build();

        session.search("alpha");
        clock.advance(DEBOUNCE_MILLIS);
        session.poll();

        let state = session.state();
        assert!(!state.is_loading);
        assert!(state.results.is_empty());
        let error = state.error.as_deref().expect("error should be surfaced");
        assert!(error.contains("Search failed"));
    }

    #[test]
    fn test_error_clears_when_query_is_emptied() {
        let clock = Arc::new(ManualClock::new());
        let mut session = SearchSession::builder(Arc::new(FailingStore))
            .clock(clock.clone())
            .build();
        session.search("alpha");
        clock.advance(DEBOUNCE_MILLIS);
        session.poll();
        assert!(session.state().error.is_some());

        session.search("");
        assert!(session.state().error.is_none());
    }

    // ========================================
    // History Tests
    // ========================================

    #[test]
    fn test_successful_searches_enter_history_deduplicated() {
        let (mut session, clock) = session_with_clock();
        for query in ["alpha", "portal", "alpha"] {
            session.search(query);
            settle(&mut session, &clock);
        }

        assert_eq!(
            session.state().recent_searches.to_vec(),
            vec!["alpha", "portal"]
        );
    }

    #[test]
    fn test_history_persists_through_kv_collaborator() {
        let kv = Arc::new(InMemoryKeyValue::new());
        let clock = Arc::new(ManualClock::new());

        {
            let mut session = SearchSession::builder(Arc::new(sample_store()))
                .clock(clock.clone())
                .history(kv.clone())
                .build();
            session.search("presupuesto");
            clock.advance(DEBOUNCE_MILLIS);
            session.poll();
        }

        // A fresh session over the same collaborator sees the history
        let session = SearchSession::builder(Arc::new(sample_store()))
            .clock(clock)
            .history(kv)
            .build();
        assert_eq!(
            session.state().recent_searches.to_vec(),
            vec!["presupuesto"]
        );
    }
}
