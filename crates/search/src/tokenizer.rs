//! Query tokenizer
//!
//! Queries are lower-cased and split on whitespace. Nothing more: no
//! stemming, no stopwords, no length filtering. Duplicate tokens are kept
//! on purpose - scoring is additive, so a repeated token keeps accumulating
//! weight and scores stay monotone in the token list.

/// Tokenize a query into lower-cased, whitespace-delimited fragments
///
/// Runs of whitespace never produce phantom empty tokens.
///
/// # Example
///
/// ```
/// use atrium_search::tokenizer::tokenize;
///
/// let tokens = tokenize("  Juan   García ");
/// assert_eq!(tokens, vec!["juan", "garcía"]);
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}
