//! Quick-filter tag chips.

use lumen_core::catalog::Catalog;
use schemars::JsonSchema;
use serde::Serialize;

use crate::state::FilterState;

/// Number of chips offered by the listing when nothing else is configured.
pub const DEFAULT_TAG_CLOUD_SIZE: usize = 6;

/// One selectable tag and whether it is currently active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TagChip {
    pub tag: String,
    pub active: bool,
}

/// The first `limit` distinct catalog tags in ascending order.
#[must_use]
pub fn common_tags(catalog: &Catalog, state: &FilterState, limit: usize) -> Vec<TagChip> {
    catalog
        .all_tags()
        .into_iter()
        .take(limit)
        .map(|tag| TagChip {
            tag: tag.to_string(),
            active: state.is_tag_active(tag),
        })
        .collect()
}
