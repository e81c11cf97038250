//! Atrium - embedded global search for a business portal
//!
//! Atrium is an in-memory search engine over the portal's six entity types
//! (projects, assistants, users, tasks, invoices, reports): tokenized
//! multi-field matching with per-field weights, stable relevance ranking,
//! offset/limit pagination, and a debounced search-session controller with
//! bounded recent-search history.
//!
//! # Quick Start
//!
//! ```
//! use atrium::{sample_store, ManualClock, SearchSession};
//! use std::sync::Arc;
//!
//! let clock = Arc::new(ManualClock::new());
//! let mut session = SearchSession::builder(Arc::new(sample_store()))
//!     .clock(clock.clone())
//!     .build();
//!
//! session.search("alpha");
//! clock.advance(300);          // the debounce quiet period
//! session.poll();
//!
//! let state = session.state();
//! assert_eq!(state.results[0].title, "Proyecto Alpha");
//! ```
//!
//! # Architecture
//!
//! The pipeline is record store → field extraction → weighted substring
//! scoring → stable ranking → pagination, orchestrated by [`SearchSession`].
//! The record store and the key-value persistence collaborator are
//! injected trait objects, so hosts substitute their own data sources and
//! storage without touching the engine.

// Re-export the public API from the member crates
pub use atrium_core::*;
pub use atrium_search::{
    extract_fields, field_table, highlight_first, match_records, paginate, projection, rank,
    run_query, run_query_at, score_fields, tokenize, ExtractedField, FieldSpec, Projection,
    MARK_CLOSE, MARK_OPEN,
};
pub use atrium_session::{
    Clock, Debouncer, ManualClock, RecentSearches, SearchSession, SessionBuilder, SessionState,
    SystemClock, DEBOUNCE_MILLIS, RECENT_SEARCHES_KEY, RECENT_SEARCH_CAP,
};
pub use atrium_store::{
    sample_store, InMemoryKeyValue, InMemoryRecordStore, KeyValueStore, RecordStore,
};
