//! Autocomplete suggestion data and filtering.

use super::identifiers::SuggestionId;
use serde::Deserialize;

/// A single autocomplete entry supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    /// Stable id reported with selections.
    pub id: SuggestionId,
    /// Display text, also the text matched against the query.
    pub value: String,
}

impl Suggestion {
    /// Create a suggestion.
    pub fn new(id: impl Into<SuggestionId>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Filter suggestions by case-insensitive, unanchored substring match.
///
/// Source order is preserved and the result is truncated to `limit`.
/// An empty query matches every suggestion.
pub fn filter_suggestions<'a>(
    suggestions: &'a [Suggestion],
    query: &str,
    limit: usize,
) -> Vec<&'a Suggestion> {
    let query_lower = query.to_lowercase();
    suggestions
        .iter()
        .filter(|s| s.value.to_lowercase().contains(&query_lower))
        .take(limit)
        .collect()
}
