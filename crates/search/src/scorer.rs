//! Weighted substring scorer/matcher
//!
//! The matching pass: tokenize the query, expand the type filters, extract
//! each candidate's fields, and accumulate field weights for every
//! (token, field) substring hit. Matching is case-insensitive and
//! non-anchored; scoring is additive and uncapped - a token may hit many
//! fields and a field may hit many tokens, and every hit contributes.
//!
//! The first field (in extraction order) with any hit supplies the
//! highlighted snippet: the first occurrence of the earliest matching
//! token, wrapped in `<mark>`, original casing preserved.

use crate::fields::{extract_fields, ExtractedField};
use crate::projection::projection;
use crate::tokenizer::tokenize;
use atrium_core::{expand_type_filters, Result, SearchFilters, SearchResult};
use atrium_store::RecordStore;

/// Opening highlight marker
pub const MARK_OPEN: &str = "<mark>";

/// Closing highlight marker
pub const MARK_CLOSE: &str = "</mark>";

// ============================================================================
// Matching
// ============================================================================

/// Match and score every candidate record against a query
///
/// Returns results in store encounter order (canonical type order, then
/// insertion order within a type) - the ranker owns ordering. A record
/// surfaces only if its accumulated score is positive and at least
/// `min_score`.
///
/// An empty (or whitespace-only) query short-circuits to an empty sequence
/// without touching the store.
pub fn match_records(
    query: &str,
    store: &dyn RecordStore,
    filters: &SearchFilters,
    min_score: u32,
) -> Result<Vec<SearchResult>> {
    if query.trim().is_empty() {
        return Ok(vec![]);
    }

    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Ok(vec![]);
    }

    let mut results = Vec::new();

    for entity_type in expand_type_filters(&filters.entity_types) {
        for record in store.records(entity_type)? {
            let fields = extract_fields(&record);
            let (score, highlight) = score_fields(&tokens, &fields);

            if score == 0 || score < min_score {
                continue;
            }

            let p = projection(entity_type);
            results.push(SearchResult {
                id: record.id().to_string(),
                entity_type,
                title: (p.title)(&record),
                subtitle: (p.subtitle)(&record),
                description: (p.description)(&record),
                url: p.url(&record),
                icon: p.icon,
                score,
                highlight,
                record,
            });
        }
    }

    Ok(results)
}

/// Accumulate the weighted score of one record's extracted fields
///
/// Returns the total score and the highlighted snippet from the first
/// field with any hit. Tokens must already be lower-cased (the tokenizer
/// guarantees this).
pub fn score_fields(tokens: &[String], fields: &[ExtractedField]) -> (u32, Option<String>) {
    let mut score = 0u32;
    let mut highlight = None;

    for field in fields {
        let text_lower = field.text.to_lowercase();
        let mut field_hit = false;

        for token in tokens {
            if text_lower.contains(token.as_str()) {
                score += field.weight;
                field_hit = true;
            }
        }

        if field_hit && highlight.is_none() {
            highlight = tokens
                .iter()
                .find(|token| text_lower.contains(token.as_str()))
                .map(|token| highlight_first(&field.text, token));
        }
    }

    (score, highlight)
}

// ============================================================================
// Highlighting
// ============================================================================

/// Wrap the first case-insensitive occurrence of `token_lower` in markers
///
/// All other characters keep their original case. If no occurrence is
/// found (case folding can shift lengths for exotic scripts), the text is
/// returned unmarked rather than erroring.
pub fn highlight_first(text: &str, token_lower: &str) -> String {
    match find_case_insensitive(text, token_lower) {
        Some((start, end)) => format!(
            "{}{MARK_OPEN}{}{MARK_CLOSE}{}",
            &text[..start],
            &text[start..end],
            &text[end..]
        ),
        None => text.to_string(),
    }
}

/// Byte range of the first case-insensitive occurrence of `token_lower`
///
/// Scans fixed-width char windows so the returned range always sits on
/// char boundaries of the original text.
fn find_case_insensitive(text: &str, token_lower: &str) -> Option<(usize, usize)> {
    let token_chars = token_lower.chars().count();
    if token_chars == 0 {
        return None;
    }

    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let text_chars = bounds.len() - 1;
    if token_chars > text_chars {
        return None;
    }

    for start in 0..=(text_chars - token_chars) {
        let (lo, hi) = (bounds[start], bounds[start + token_chars]);
        if text[lo..hi].to_lowercase() == token_lower {
            return Some((lo, hi));
        }
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
