//! User-selected criteria driving the research listing.

use std::collections::BTreeSet;

use lumen_core::enums::{CategoryFilter, DateWindow, SortKey};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The five independent criteria of the research listing.
///
/// One instance lives per browsing session. It is never persisted; a new
/// session starts from [`FilterState::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FilterState {
    /// Free-text query. Empty matches everything.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub date_window: DateWindow,
    #[serde(default)]
    pub sort_key: SortKey,
    /// Tags with OR semantics. Empty matches everything.
    #[serde(default)]
    pub active_tags: BTreeSet<String>,
}

impl FilterState {
    /// Toggle `tag`: remove it if active, add it otherwise.
    ///
    /// Returns `true` if the tag is active after the call.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.active_tags.remove(tag) {
            false
        } else {
            self.active_tags.insert(tag.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    /// Reset every criterion to its default in one step.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any criterion differs from its default.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        *self != Self::default()
    }
}

#[cfg(test)]
mod tests {
    use lumen_core::enums::Category;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_state_has_no_active_filters() {
        let state = FilterState::default();
        assert!(state.query.is_empty());
        assert_eq!(state.category, CategoryFilter::All);
        assert_eq!(state.date_window, DateWindow::Newest);
        assert_eq!(state.sort_key, SortKey::Relevance);
        assert!(state.active_tags.is_empty());
        assert!(!state.has_active_filters());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = FilterState::default();
        assert!(state.toggle_tag("technology"));
        assert!(state.is_tag_active("technology"));
        assert!(!state.toggle_tag("technology"));
        assert!(!state.is_tag_active("technology"));
    }

    #[test]
    fn toggle_twice_restores_prior_tags() {
        let mut state = FilterState::default();
        state.toggle_tag("assessment");
        state.toggle_tag("inclusion");
        let before = state.active_tags.clone();

        state.toggle_tag("assessment");
        state.toggle_tag("assessment");
        assert_eq!(state.active_tags, before);

        state.toggle_tag("wellbeing");
        state.toggle_tag("wellbeing");
        assert_eq!(state.active_tags, before);
    }

    #[test]
    fn any_single_change_counts_as_active() {
        let mut state = FilterState {
            query: " ".into(),
            ..FilterState::default()
        };
        assert!(state.has_active_filters());

        state.clear();
        state.category = Category::Pedagogy.into();
        assert!(state.has_active_filters());

        state.clear();
        state.sort_key = SortKey::Recent;
        assert!(state.has_active_filters());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = FilterState {
            query: "learning".into(),
            category: Category::OnlineLearning.into(),
            date_window: DateWindow::LastYear,
            sort_key: SortKey::Citations,
            active_tags: ["technology".to_string()].into(),
        };
        state.clear();
        let once = state.clone();
        state.clear();
        assert_eq!(state, once);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let state: FilterState = serde_json::from_str(r#"{"sort_key":"downloads"}"#).unwrap();
        assert_eq!(state.sort_key, SortKey::Downloads);
        assert_eq!(state.date_window, DateWindow::Newest);
        assert_eq!(state.category, CategoryFilter::All);
    }
}
