//! Month-granularity publication dates.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

/// A calendar month in which a research item was published.
///
/// Stored as the first day of that month so it can be compared directly with
/// day-granularity cutoffs. Rendered as `"Jan 2023"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublishedMonth(NaiveDate);

impl PublishedMonth {
    /// Build a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDate(format!("{year}-{month:02} is not a valid month")))
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// The first calendar day of the month.
    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for PublishedMonth {
    fn from(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }
}

impl fmt::Display for PublishedMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%b %Y"))
    }
}

impl FromStr for PublishedMonth {
    type Err = CoreError;

    /// Accepts `"Jan 2023"`, `"January 2023"`, and `"2023-01"`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let with_day = format!("{trimmed} 1");

        ["%b %Y %d", "%B %Y %d", "%Y-%m %d"]
            .iter()
            .find_map(|pattern| NaiveDate::parse_from_str(&with_day, pattern).ok())
            .map(Self)
            .ok_or_else(|| {
                CoreError::InvalidDate(format!(
                    "'{raw}' (expected a month like 'Jan 2023' or '2023-01')"
                ))
            })
    }
}

impl Serialize for PublishedMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PublishedMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for PublishedMonth {
    fn schema_name() -> Cow<'static, str> {
        "PublishedMonth".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^[A-Z][a-z]{2} [0-9]{4}$",
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_short_month_name() {
        let month: PublishedMonth = "Jan 2023".parse().expect("should parse");
        assert_eq!(month.year(), 2023);
        assert_eq!(month.month(), 1);
        assert_eq!(month.first_day(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn parses_long_and_iso_forms() {
        let long: PublishedMonth = "September 2023".parse().unwrap();
        let iso: PublishedMonth = "2023-09".parse().unwrap();
        assert_eq!(long, iso);
        assert_eq!(long.to_string(), "Sep 2023");
    }

    #[test]
    fn rejects_garbage() {
        let err = "Smarch 2023".parse::<PublishedMonth>().expect_err("should fail");
        assert!(err.to_string().contains("Smarch 2023"));
    }

    #[test]
    fn new_rejects_month_thirteen() {
        assert!(PublishedMonth::new(2023, 13).is_err());
        assert!(PublishedMonth::new(2023, 0).is_err());
    }

    #[test]
    fn orders_chronologically() {
        let dec = PublishedMonth::new(2022, 12).unwrap();
        let jan = PublishedMonth::new(2023, 1).unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn from_date_snaps_to_first_day() {
        let month = PublishedMonth::from(NaiveDate::from_ymd_opt(2023, 5, 17).unwrap());
        assert_eq!(month, PublishedMonth::new(2023, 5).unwrap());
    }

    #[test]
    fn serializes_as_display_string() {
        let month = PublishedMonth::new(2023, 3).unwrap();
        assert_eq!(serde_json::to_string(&month).unwrap(), "\"Mar 2023\"");
    }
}
