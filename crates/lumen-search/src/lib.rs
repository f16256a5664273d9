//! # lumen-search
//!
//! Derives the filtered, ordered research listing from the catalog and the
//! user's current selections.
//!
//! - [`state::FilterState`] holds the five criteria (query, category, tags,
//!   date window, sort key) with toggle and clear operations
//! - [`pipeline::derive`] is the pure `(catalog, state, today) -> items` function
//! - [`browser::ResearchBrowser`] is a single-owner session that recomputes on
//!   every read
//! - [`tags::common_tags`] builds the tag chips offered as quick filters

pub mod browser;
pub mod pipeline;
pub mod state;
pub mod tags;

pub use browser::ResearchBrowser;
pub use pipeline::{ResearchView, derive, derive_view};
pub use state::FilterState;
