//! A single-owner browsing session over a catalog.

use chrono::NaiveDate;
use lumen_core::catalog::Catalog;
use lumen_core::entities::ResearchItem;
use lumen_core::enums::{CategoryFilter, DateWindow, SortKey};

use crate::pipeline::{self, ResearchView};
use crate::state::FilterState;
use crate::tags::{self, TagChip};

/// Holds the filter state of one session and derives results on demand.
///
/// Results are recomputed from `(catalog, state, today)` on every read; the
/// browser never caches a previous listing.
#[derive(Debug, Clone)]
pub struct ResearchBrowser<'a> {
    catalog: &'a Catalog,
    state: FilterState,
    today: NaiveDate,
}

impl<'a> ResearchBrowser<'a> {
    /// Start a session with default criteria.
    #[must_use]
    pub fn new(catalog: &'a Catalog, today: NaiveDate) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
            today,
        }
    }

    /// Start a session from existing criteria.
    #[must_use]
    pub const fn with_state(catalog: &'a Catalog, state: FilterState, today: NaiveDate) -> Self {
        Self {
            catalog,
            state,
            today,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        tracing::debug!(query = %self.state.query, "query changed");
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.state.category = category;
        tracing::debug!(%category, "category changed");
    }

    pub fn set_date_window(&mut self, date_window: DateWindow) {
        self.state.date_window = date_window;
        tracing::debug!(%date_window, "date window changed");
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.state.sort_key = sort_key;
        tracing::debug!(%sort_key, "sort key changed");
    }

    /// Toggle a tag; returns whether it is active afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let active = self.state.toggle_tag(tag);
        tracing::debug!(tag, active, "tag toggled");
        active
    }

    /// Reset all criteria to their defaults.
    pub fn clear(&mut self) {
        self.state.clear();
        tracing::debug!("filters cleared");
    }

    /// Move the reference date used by recency windows.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    #[must_use]
    pub fn results(&self) -> Vec<&'a ResearchItem> {
        pipeline::derive(self.catalog, &self.state, self.today)
    }

    #[must_use]
    pub fn view(&self) -> ResearchView<'a> {
        pipeline::derive_view(self.catalog, &self.state, self.today)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.results().len()
    }

    /// Quick-filter chips, marked active according to the current state.
    #[must_use]
    pub fn tag_chips(&self, limit: usize) -> Vec<TagChip> {
        tags::common_tags(self.catalog, &self.state, limit)
    }
}
