//! Search session layer for the Atrium portal
//!
//! This crate provides:
//! - Clock trait with system and manual implementations (injected time)
//! - Debouncer, an explicit cancellable trailing-edge deferral primitive
//! - RecentSearches, the bounded deduplicated query history
//! - SearchSession, the debounced state-machine controller over the
//!   search pipeline
//!
//! # Usage
//!
//! ```
//! use atrium_session::SearchSession;
//! use atrium_store::sample_store;
//! use std::sync::Arc;
//!
//! let mut session = SearchSession::builder(Arc::new(sample_store())).build();
//! session.search("portal");
//! // ... the host event loop calls session.poll() until the debounce
//! // window elapses, then reads session.state().results
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod controller;
pub mod debounce;
pub mod history;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{SearchSession, SessionBuilder, SessionState, DEBOUNCE_MILLIS};
pub use debounce::Debouncer;
pub use history::{RecentSearches, RECENT_SEARCHES_KEY, RECENT_SEARCH_CAP};
