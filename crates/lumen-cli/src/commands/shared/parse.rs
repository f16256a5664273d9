use std::str::FromStr;

use anyhow::Context;
use lumen_core::errors::CoreError;

/// Parse an optional selector token, falling back to the type's default.
pub fn parse_or_default<T>(raw: Option<&str>, field: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = CoreError> + Default,
{
    raw.map_or_else(
        || Ok(T::default()),
        |raw| {
            raw.parse::<T>()
                .with_context(|| format!("invalid --{field} value"))
        },
    )
}

#[cfg(test)]
mod tests {
    use lumen_core::enums::{Category, CategoryFilter, DateWindow, SortKey};

    use super::parse_or_default;

    #[test]
    fn missing_value_uses_default() {
        let window: DateWindow = parse_or_default(None, "date-window").unwrap();
        assert_eq!(window, DateWindow::Newest);
    }

    #[test]
    fn parses_hyphenated_token() {
        let category: CategoryFilter =
            parse_or_default(Some("higher-education"), "category").unwrap();
        assert_eq!(category, CategoryFilter::Only(Category::HigherEducation));
    }

    #[test]
    fn error_names_the_flag() {
        let err = parse_or_default::<SortKey>(Some("hot"), "sort").expect_err("should fail");
        let message = format!("{err:#}");
        assert!(message.contains("invalid --sort value"));
        assert!(message.contains("'hot'"));
    }
}
