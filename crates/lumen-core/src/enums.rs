//! Closed selector enums for the research catalog.
//!
//! All enums use kebab-case tokens via `#[serde(rename_all = "kebab-case")]`,
//! matching the values the selector controls emit (`higher-education`,
//! `last-month`, ...). `FromStr` is lenient about case and accepts `_` for `-`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

/// Normalize a free-form label into a selector token.
///
/// Lower-cases the input and replaces every run of whitespace with a single
/// hyphen: `"Higher Education"` becomes `"higher-education"`.
#[must_use]
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', "-")
}

fn expected_tokens<T: Copy>(all: &[T], as_str: fn(T) -> &'static str) -> String {
    all.iter()
        .map(|variant| as_str(*variant))
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Subject category of a research item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    EducationalTechnology,
    OnlineLearning,
    InclusiveEducation,
    HigherEducation,
    Pedagogy,
    EducationalPsychology,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Self; 6] = [
        Self::EducationalTechnology,
        Self::OnlineLearning,
        Self::InclusiveEducation,
        Self::HigherEducation,
        Self::Pedagogy,
        Self::EducationalPsychology,
    ];

    /// Selector token for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EducationalTechnology => "educational-technology",
            Self::OnlineLearning => "online-learning",
            Self::InclusiveEducation => "inclusive-education",
            Self::HigherEducation => "higher-education",
            Self::Pedagogy => "pedagogy",
            Self::EducationalPsychology => "educational-psychology",
        }
    }

    /// Alias for [`Category::as_str`], named after the selector value it produces.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        self.as_str()
    }

    /// Human-readable label as shown on research cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EducationalTechnology => "Educational Technology",
            Self::OnlineLearning => "Online Learning",
            Self::InclusiveEducation => "Inclusive Education",
            Self::HigherEducation => "Higher Education",
            Self::Pedagogy => "Pedagogy",
            Self::EducationalPsychology => "Educational Psychology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(raw);
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == token || slugify(category.label()) == token)
            .ok_or_else(|| CoreError::InvalidToken {
                kind: "category",
                value: raw.to_string(),
                expected: expected_tokens(&Self::ALL, Self::as_str),
            })
    }
}

// ---------------------------------------------------------------------------
// CategoryFilter
// ---------------------------------------------------------------------------

/// Category selector value: the `all` sentinel or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_TOKEN: &'static str = "all";

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => Self::ALL_TOKEN,
            Self::Only(category) => category.as_str(),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Categories",
            Self::Only(category) => category.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if normalize_token(raw) == Self::ALL_TOKEN {
            return Ok(Self::All);
        }
        raw.parse::<Category>()
            .map(Self::Only)
            .map_err(|_| CoreError::InvalidToken {
                kind: "category",
                value: raw.to_string(),
                expected: format!(
                    "{}, {}",
                    Self::ALL_TOKEN,
                    expected_tokens(&Category::ALL, Category::as_str)
                ),
            })
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for CategoryFilter {
    fn schema_name() -> Cow<'static, str> {
        "CategoryFilter".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let mut tokens = vec![Self::ALL_TOKEN];
        tokens.extend(Category::ALL.iter().map(|category| category.as_str()));
        json_schema!({
            "type": "string",
            "enum": tokens,
        })
    }
}

// ---------------------------------------------------------------------------
// DateWindow
// ---------------------------------------------------------------------------

/// Date selector: either an ordering over the whole set or a recency window.
///
/// ```text
/// newest     → sort by date, descending
/// oldest     → sort by date, ascending
/// last-month → keep items dated within one calendar month of today
/// last-year  → keep items dated within one calendar year of today
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DateWindow {
    #[default]
    Newest,
    Oldest,
    LastMonth,
    LastYear,
}

impl DateWindow {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::LastMonth, Self::LastYear];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::LastMonth => "last-month",
            Self::LastYear => "last-year",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::LastMonth => "Last Month",
            Self::LastYear => "Last Year",
        }
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateWindow {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(raw);
        Self::ALL
            .into_iter()
            .find(|window| window.as_str() == token)
            .ok_or_else(|| CoreError::InvalidToken {
                kind: "date window",
                value: raw.to_string(),
                expected: expected_tokens(&Self::ALL, Self::as_str),
            })
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Final ordering applied after the date-window stage.
///
/// `Relevance` performs no scoring; it keeps whatever order the earlier
/// stages produced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Relevance,
    Citations,
    Downloads,
    Recent,
}

impl SortKey {
    pub const ALL: [Self; 4] = [
        Self::Relevance,
        Self::Citations,
        Self::Downloads,
        Self::Recent,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Citations => "citations",
            Self::Downloads => "downloads",
            Self::Recent => "recent",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::Citations => "Most Cited",
            Self::Downloads => "Most Downloaded",
            Self::Recent => "Recently Added",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = normalize_token(raw);
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == token)
            .ok_or_else(|| CoreError::InvalidToken {
                kind: "sort key",
                value: raw.to_string(),
                expected: expected_tokens(&Self::ALL, Self::as_str),
            })
    }
}
