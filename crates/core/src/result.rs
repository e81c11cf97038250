//! Search results and pages
//!
//! [`SearchResult`] is the renderable projection of one matched record;
//! [`SearchPage`] is the ranked, paginated slice the pipeline hands back.

use crate::entity::EntityType;
use crate::record::Record;
use serde::Serialize;

// ============================================================================
// SearchResult
// ============================================================================

/// One matched record, projected for rendering
///
/// Produced by the scorer, ordered by the ranker. The presentation layer
/// consumes `title`/`subtitle`/`url`/`icon` directly and may use `record`
/// (the unmodified source entity) for richer rendering.
///
/// # Invariant
///
/// `score > 0` for every surfaced result unless the search ran with
/// `min_score == 0`. Identical query + filters + options always produce an
/// identical result sequence.
///
/// Results flow outward only, so the type serializes but is never
/// deserialized back (the `icon` tag is a static projection, not data).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Source record id (unique within `entity_type`)
    pub id: String,
    /// Source entity type
    pub entity_type: EntityType,
    /// Per-type title projection
    pub title: String,
    /// Per-type secondary line ("Status: active", client name, ...)
    pub subtitle: Option<String>,
    /// The record's free-text description, when it has one
    pub description: Option<String>,
    /// Deep link (`/{section}/{type}/{id}`); navigation is the caller's job
    pub url: String,
    /// Per-type icon tag for the presentation layer
    pub icon: &'static str,
    /// Accumulated match score (weighted, additive)
    pub score: u32,
    /// Matched field text with the first token hit wrapped in `<mark>`
    pub highlight: Option<String>,
    /// The unmodified source record
    pub record: Record,
}

// ============================================================================
// SearchPage
// ============================================================================

/// A ranked, paginated slice of results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    /// The page window `[offset, offset + limit)` of the ranked sequence
    pub results: Vec<SearchResult>,
    /// Total matches across the whole ranked sequence (pre-pagination)
    pub total_matches: usize,
    /// Full-page heuristic: true iff the page length equals the requested
    /// limit. Known imprecision: reports true when the total match count is
    /// an exact multiple of the limit and this was the final page. Callers
    /// needing an exact flag can compare `offset + limit` with
    /// `total_matches` themselves.
    pub has_more: bool,
}

impl SearchPage {
    /// A page with no results
    pub fn empty() -> Self {
        SearchPage {
            results: vec![],
            total_matches: 0,
            has_more: false,
        }
    }

    /// Number of results in this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if the page holds no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
