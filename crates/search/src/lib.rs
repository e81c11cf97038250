//! Search pipeline for the Atrium portal
//!
//! This crate provides:
//! - Query tokenizer (lowercase, whitespace-delimited)
//! - Per-entity-type field-extraction table with three-tier weights
//! - Weighted substring scorer/matcher with `<mark>` highlighting
//! - Per-entity-type projection table (title/subtitle/url/icon)
//! - Stable ranker and offset/limit pagination
//!
//! # Usage
//!
//! ```
//! use atrium_search::run_query;
//! use atrium_store::sample_store;
//! use atrium_core::{SearchFilters, SearchOptions};
//!
//! let store = sample_store();
//! let page = run_query(
//!     "alpha",
//!     &store,
//!     &SearchFilters::default(),
//!     &SearchOptions::default(),
//! ).unwrap();
//! assert!(!page.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fields;
pub mod projection;
pub mod ranker;
pub mod scorer;
pub mod tokenizer;

use atrium_core::{Result, SearchFilters, SearchOptions, SearchPage};
use atrium_store::RecordStore;

// Re-export commonly used items
pub use fields::{extract_fields, field_table, ExtractedField, FieldSpec};
pub use projection::{projection, Projection};
pub use ranker::{paginate, rank};
pub use scorer::{highlight_first, match_records, score_fields, MARK_CLOSE, MARK_OPEN};
pub use tokenizer::tokenize;

// ============================================================================
// Pipeline
// ============================================================================

/// Run the full pipeline: match, rank, paginate at the options' offset
pub fn run_query(
    query: &str,
    store: &dyn RecordStore,
    filters: &SearchFilters,
    options: &SearchOptions,
) -> Result<SearchPage> {
    run_query_at(query, store, filters, options, options.offset)
}

/// Run the full pipeline with an explicit page offset
///
/// The session controller uses this for load-more, where the cursor has
/// advanced past the options' base offset.
pub fn run_query_at(
    query: &str,
    store: &dyn RecordStore,
    filters: &SearchFilters,
    options: &SearchOptions,
    offset: usize,
) -> Result<SearchPage> {
    let mut results = match_records(query, store, filters, options.min_score)?;
    rank(&mut results, options.sort_by, options.sort_order);
    Ok(paginate(results, offset, options.limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_store::sample_store;

    #[test]
    fn test_run_query_empty_query_yields_empty_page() {
        let store = sample_store();
        let page = run_query(
            "",
            &store,
            &SearchFilters::default(),
            &SearchOptions::default(),
        )
        .unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total_matches, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn test_run_query_at_advances_the_window() {
        let store = sample_store();
        let options = SearchOptions::default().with_limit(1).with_min_score(0);

        let first = run_query("portal", &store, &SearchFilters::default(), &options).unwrap();
        let second =
            run_query_at("portal", &store, &SearchFilters::default(), &options, 1).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_ne!(first.results[0].id, second.results[0].id);
    }
}
