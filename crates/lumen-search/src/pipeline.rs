//! The research filter/sort pipeline.
//!
//! Stages run in a fixed order, each operating on the output of the previous:
//!
//! ```text
//! catalog → text → category → tags → date window → sort key → view
//! ```
//!
//! The three filters only narrow the candidate set. The date-window stage
//! either reorders (`newest`/`oldest`) or drops old items (`last-month`/
//! `last-year`), and the sort key may replace that ordering afterwards. All
//! sorts are stable, so ties keep the order of the previous stage.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use chrono::{Months, NaiveDate};
use lumen_core::catalog::Catalog;
use lumen_core::entities::ResearchItem;
use lumen_core::enums::{CategoryFilter, DateWindow, SortKey, slugify};
use serde::Serialize;

use crate::state::FilterState;

/// An ordered result of the pipeline borrowed from its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchView<'a> {
    pub items: Vec<&'a ResearchItem>,
}

impl<'a> ResearchView<'a> {
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// No item satisfies the criteria. A normal state, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ResearchItem> + '_ {
        self.items.iter().copied()
    }
}

/// Derive the ordered listing for `state`, evaluating date windows at `today`.
#[must_use]
pub fn derive<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    today: NaiveDate,
) -> Vec<&'a ResearchItem> {
    let items: Vec<&ResearchItem> = catalog.items().iter().collect();
    let items = filter_by_query(items, &state.query);
    let items = filter_by_category(items, state.category);
    let items = filter_by_tags(items, &state.active_tags);
    let items = apply_date_window(items, state.date_window, today);
    let items = apply_sort_key(items, state.sort_key);

    tracing::debug!(
        query = %state.query,
        category = %state.category,
        tags = state.active_tags.len(),
        date_window = %state.date_window,
        sort_key = %state.sort_key,
        results = items.len(),
        "derived research listing"
    );

    items
}

/// [`derive`] wrapped in a [`ResearchView`].
#[must_use]
pub fn derive_view<'a>(
    catalog: &'a Catalog,
    state: &FilterState,
    today: NaiveDate,
) -> ResearchView<'a> {
    ResearchView {
        items: derive(catalog, state, today),
    }
}

/// Keep items whose title, abstract, authors, or tags contain `query`,
/// ignoring case. An empty query keeps everything.
#[must_use]
pub fn filter_by_query<'a>(
    mut items: Vec<&'a ResearchItem>,
    query: &str,
) -> Vec<&'a ResearchItem> {
    if query.is_empty() {
        return items;
    }
    let needle = query.to_lowercase();
    items.retain(|item| item.matches_text(&needle));
    items
}

/// Keep items in the selected category. `All` keeps everything.
#[must_use]
pub fn filter_by_category(
    mut items: Vec<&ResearchItem>,
    category: CategoryFilter,
) -> Vec<&ResearchItem> {
    if let CategoryFilter::Only(selected) = category {
        items.retain(|item| slugify(item.category.label()) == selected.slug());
    }
    items
}

/// Keep items sharing at least one tag with `active_tags`. An empty set
/// keeps everything.
#[must_use]
pub fn filter_by_tags<'a>(
    mut items: Vec<&'a ResearchItem>,
    active_tags: &BTreeSet<String>,
) -> Vec<&'a ResearchItem> {
    if !active_tags.is_empty() {
        items.retain(|item| item.has_any_tag(active_tags));
    }
    items
}

/// Cutoff day of a recency window, if `window` is one. Items published on or
/// before it are dropped.
///
/// Subtraction is by calendar month and clamps to the end of shorter months.
#[must_use]
pub fn date_window_cutoff(window: DateWindow, today: NaiveDate) -> Option<NaiveDate> {
    let months = match window {
        DateWindow::Newest | DateWindow::Oldest => return None,
        DateWindow::LastMonth => 1,
        DateWindow::LastYear => 12,
    };
    Some(
        today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN),
    )
}

/// Apply the date selector: reorder for `Newest`/`Oldest`, keep only items
/// published after the cutoff for `LastMonth`/`LastYear` without reordering.
///
/// A publication month starts at midnight on its first day while the cutoff
/// carries the current time of day, so an item dated on the cutoff day
/// itself is already outside the window.
#[must_use]
pub fn apply_date_window(
    mut items: Vec<&ResearchItem>,
    window: DateWindow,
    today: NaiveDate,
) -> Vec<&ResearchItem> {
    match window {
        DateWindow::Newest => items.sort_by_key(|item| Reverse(item.date)),
        DateWindow::Oldest => items.sort_by_key(|item| item.date),
        DateWindow::LastMonth | DateWindow::LastYear => {
            if let Some(cutoff) = date_window_cutoff(window, today) {
                items.retain(|item| item.date.first_day() > cutoff);
            }
        }
    }
    items
}

/// Apply the final ordering. `Relevance` leaves the order untouched.
#[must_use]
pub fn apply_sort_key(mut items: Vec<&ResearchItem>, sort_key: SortKey) -> Vec<&ResearchItem> {
    match sort_key {
        SortKey::Relevance => {}
        SortKey::Citations => items.sort_by_key(|item| Reverse(item.citations)),
        SortKey::Downloads => items.sort_by_key(|item| Reverse(item.downloads)),
        SortKey::Recent => items.sort_by_key(|item| Reverse(item.date)),
    }
    items
}
