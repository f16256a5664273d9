//! Research listing configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_tag_cloud_size() -> usize {
    6
}

const fn default_abstract_width() -> usize {
    80
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowseConfig {
    /// Pinned "today" for recency windows, as `YYYY-MM-DD`. Empty uses the
    /// local clock.
    #[serde(default)]
    pub reference_date: String,

    /// Number of quick-filter tags offered.
    #[serde(default = "default_tag_cloud_size")]
    pub tag_cloud_size: usize,

    /// Abstract truncation width in table output.
    #[serde(default = "default_abstract_width")]
    pub abstract_width: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            reference_date: String::new(),
            tag_cloud_size: default_tag_cloud_size(),
            abstract_width: default_abstract_width(),
        }
    }
}

impl BrowseConfig {
    /// Parse the pinned reference date, if one is set.
    pub fn reference_date(&self) -> Result<Option<NaiveDate>, ConfigError> {
        let raw = self.reference_date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|error| ConfigError::InvalidValue {
                field: "browse.reference_date".to_string(),
                reason: format!("'{raw}' is not a YYYY-MM-DD date: {error}"),
            })
    }
}
