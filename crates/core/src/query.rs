//! Search filters and options
//!
//! This module defines the query contract:
//! - SearchFilters: which records are candidates (entity types plus
//!   accepted-but-unconsumed refinements reserved for future extension)
//! - SearchOptions: how candidates are ranked and paginated
//! - FilterPatch / OptionsPatch: partial-merge updates used by the session
//!   controller so filter/option transitions stay enumerable
//!
//! All builders follow the `with_*` convention; `Default` gives the
//! documented defaults.

use crate::entity::TypeFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default page size
pub const DEFAULT_LIMIT: usize = 20;

/// Default minimum score a record needs to surface as a result
pub const DEFAULT_MIN_SCORE: u32 = 1;

// ============================================================================
// DateRange
// ============================================================================

/// Closed timestamp range filter
///
/// Accepted on [`SearchFilters`] for contract completeness. The in-memory
/// matcher does not consume it yet; a future data source may.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive start
    pub from: DateTime<Utc>,
    /// Inclusive end
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Create a new range
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        DateRange { from, to }
    }
}

// ============================================================================
// SearchFilters
// ============================================================================

/// Candidate-selection filters
///
/// Only `entity_types` is consumed by the matcher. The remaining fields are
/// part of the contract for future extension and must be accepted without
/// error even while unused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Entity-type selectors; default `[all]`
    pub entity_types: Vec<TypeFilter>,
    /// Optional timestamp range (reserved)
    pub date_range: Option<DateRange>,
    /// Status tags to match (reserved)
    pub statuses: Vec<String>,
    /// Labels to match (reserved)
    pub tags: Vec<String>,
    /// Priority tags to match (reserved)
    pub priorities: Vec<String>,
    /// Assignee names to match (reserved)
    pub assignees: Vec<String>,
    /// Creator names to match (reserved)
    pub creators: Vec<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            entity_types: vec![TypeFilter::All],
            date_range: None,
            statuses: vec![],
            tags: vec![],
            priorities: vec![],
            assignees: vec![],
            creators: vec![],
        }
    }
}

impl SearchFilters {
    /// Builder: restrict to the given entity-type selectors
    pub fn with_entity_types(mut self, types: Vec<TypeFilter>) -> Self {
        self.entity_types = types;
        self
    }

    /// Builder: set the date range
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Builder: set the status filter
    pub fn with_statuses(mut self, statuses: Vec<String>) -> Self {
        self.statuses = statuses;
        self
    }

    /// Builder: set the tag filter
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Merge a partial update into these filters
    ///
    /// Fields absent from the patch are left untouched. This is the only
    /// mutation path the session controller uses, so every filter
    /// transition is a single enumerable operation.
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(entity_types) = patch.entity_types {
            self.entity_types = entity_types;
        }
        if let Some(date_range) = patch.date_range {
            self.date_range = date_range;
        }
        if let Some(statuses) = patch.statuses {
            self.statuses = statuses;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(priorities) = patch.priorities {
            self.priorities = priorities;
        }
        if let Some(assignees) = patch.assignees {
            self.assignees = assignees;
        }
        if let Some(creators) = patch.creators {
            self.creators = creators;
        }
    }
}

/// Partial update for [`SearchFilters`]
///
/// `None` leaves the field untouched; `Some` replaces it wholesale.
/// `date_range` uses a nested `Option` so a patch can explicitly clear it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPatch {
    /// Replace the entity-type selectors
    pub entity_types: Option<Vec<TypeFilter>>,
    /// Replace (or clear, with `Some(None)`) the date range
    pub date_range: Option<Option<DateRange>>,
    /// Replace the status filter
    pub statuses: Option<Vec<String>>,
    /// Replace the tag filter
    pub tags: Option<Vec<String>>,
    /// Replace the priority filter
    pub priorities: Option<Vec<String>>,
    /// Replace the assignee filter
    pub assignees: Option<Vec<String>>,
    /// Replace the creator filter
    pub creators: Option<Vec<String>>,
}

impl FilterPatch {
    /// Patch that replaces the entity-type selectors only
    pub fn entity_types(types: Vec<TypeFilter>) -> Self {
        FilterPatch {
            entity_types: Some(types),
            ..Default::default()
        }
    }
}

// ============================================================================
// Sort Keys
// ============================================================================

/// Result ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Score, descending, stable on ties (default). Ignores [`SortOrder`].
    #[default]
    Relevance,
    /// Reserved: results carry no date, so this orders like `Relevance`
    Date,
    /// Lexicographic by result title
    Title,
    /// Lexicographic by entity-type tag
    Type,
}

/// Sort direction for the lexicographic keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending (default)
    #[default]
    Desc,
}

// ============================================================================
// SearchOptions
// ============================================================================

/// Ranking and pagination options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Page size; default 20
    pub limit: usize,
    /// Starting offset into the ranked sequence; default 0
    pub offset: usize,
    /// Ordering key; default relevance
    pub sort_by: SortBy,
    /// Direction for lexicographic keys; default descending
    pub sort_order: SortOrder,
    /// Include archived records (accepted, not yet consumed)
    pub include_archived: bool,
    /// Fuzzy matching flag (accepted, not implemented)
    pub fuzzy_search: bool,
    /// Minimum score a record needs to surface; default 1
    pub min_score: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            include_archived: false,
            fuzzy_search: false,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl SearchOptions {
    /// Builder: set the page size
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Builder: set the starting offset
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Builder: set the ordering key
    pub fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// Builder: set the minimum score threshold
    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Merge a partial update into these options
    pub fn merge(&mut self, patch: OptionsPatch) {
        if let Some(limit) = patch.limit {
            self.limit = limit;
        }
        if let Some(offset) = patch.offset {
            self.offset = offset;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(include_archived) = patch.include_archived {
            self.include_archived = include_archived;
        }
        if let Some(fuzzy_search) = patch.fuzzy_search {
            self.fuzzy_search = fuzzy_search;
        }
        if let Some(min_score) = patch.min_score {
            self.min_score = min_score;
        }
    }
}

/// Partial update for [`SearchOptions`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsPatch {
    /// Replace the page size
    pub limit: Option<usize>,
    /// Replace the starting offset
    pub offset: Option<usize>,
    /// Replace the ordering key
    pub sort_by: Option<SortBy>,
    /// Replace the sort direction
    pub sort_order: Option<SortOrder>,
    /// Replace the archived flag
    pub include_archived: Option<bool>,
    /// Replace the fuzzy flag
    pub fuzzy_search: Option<bool>,
    /// Replace the minimum score threshold
    pub min_score: Option<u32>,
}

impl OptionsPatch {
    /// Patch that replaces the sort key and direction only
    pub fn sort(sort_by: SortBy, sort_order: SortOrder) -> Self {
        OptionsPatch {
            sort_by: Some(sort_by),
            sort_order: Some(sort_order),
            ..Default::default()
        }
    }

    /// Patch that replaces the page size only
    pub fn limit(limit: usize) -> Self {
        OptionsPatch {
            limit: Some(limit),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityType;

    // ========================================
    // SearchFilters Tests
    // ========================================

    #[test]
    fn test_filters_default_is_all() {
        let filters = SearchFilters::default();
        assert_eq!(filters.entity_types, vec![TypeFilter::All]);
        assert!(filters.date_range.is_none());
        assert!(filters.statuses.is_empty());
    }

    #[test]
    fn test_filters_merge_replaces_only_patched_fields() {
        let mut filters = SearchFilters::default().with_tags(vec!["web".into()]);

        filters.merge(FilterPatch::entity_types(vec![TypeFilter::Only(
            EntityType::Invoice,
        )]));

        assert_eq!(
            filters.entity_types,
            vec![TypeFilter::Only(EntityType::Invoice)]
        );
        // Untouched by the patch
        assert_eq!(filters.tags, vec!["web".to_string()]);
    }

    #[test]
    fn test_filters_merge_can_clear_date_range() {
        let now = Utc::now();
        let mut filters = SearchFilters::default().with_date_range(DateRange::new(now, now));

        filters.merge(FilterPatch {
            date_range: Some(None),
            ..Default::default()
        });

        assert!(filters.date_range.is_none());
    }

    // ========================================
    // SearchOptions Tests
    // ========================================

    #[test]
    fn test_options_defaults() {
        let opts = SearchOptions::default();
        assert_eq!(opts.limit, 20);
        assert_eq!(opts.offset, 0);
        assert_eq!(opts.sort_by, SortBy::Relevance);
        assert_eq!(opts.sort_order, SortOrder::Desc);
        assert!(!opts.include_archived);
        assert!(!opts.fuzzy_search);
        assert_eq!(opts.min_score, 1);
    }

    #[test]
    fn test_options_builder() {
        let opts = SearchOptions::default()
            .with_limit(5)
            .with_offset(10)
            .with_sort(SortBy::Title, SortOrder::Asc)
            .with_min_score(0);

        assert_eq!(opts.limit, 5);
        assert_eq!(opts.offset, 10);
        assert_eq!(opts.sort_by, SortBy::Title);
        assert_eq!(opts.sort_order, SortOrder::Asc);
        assert_eq!(opts.min_score, 0);
    }

    #[test]
    fn test_options_merge() {
        let mut opts = SearchOptions::default();
        opts.merge(OptionsPatch::limit(50));
        opts.merge(OptionsPatch::sort(SortBy::Type, SortOrder::Asc));

        assert_eq!(opts.limit, 50);
        assert_eq!(opts.sort_by, SortBy::Type);
        // Untouched by either patch
        assert_eq!(opts.min_score, 1);
    }

    #[test]
    fn test_sort_keys_serde_lowercase() {
        assert_eq!(serde_json::to_string(&SortBy::Relevance).unwrap(), "\"relevance\"");
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
    }
}
