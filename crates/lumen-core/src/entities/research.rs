use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::PublishedMonth;
use crate::enums::Category;

/// A published research paper in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: String,
    pub date: PublishedMonth,
    pub category: Category,
    pub tags: Vec<String>,
    pub citations: u32,
    pub downloads: u32,
}

impl ResearchItem {
    /// Whether `needle` occurs in the title, abstract, authors, or any tag.
    ///
    /// `needle` must already be lower-cased; every haystack is lower-cased here.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.abstract_text.to_lowercase().contains(needle)
            || self.authors.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Whether the item carries at least one of `tags` (exact match).
    #[must_use]
    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }
}
