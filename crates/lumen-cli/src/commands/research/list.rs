use chrono::NaiveDate;
use lumen_core::entities::ResearchItem;
use lumen_search::{FilterState, ResearchView};
use serde::Serialize;

use crate::cli::subcommands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_or_default;
use crate::context::AppContext;
use crate::output::table::truncate;
use crate::output::{Tabular, output, render_rows};

/// JSON response of `lmn research list`.
#[derive(Debug, Serialize)]
struct ResearchListResponse<'a> {
    /// Matches before the output limit was applied.
    count: usize,
    filters_active: bool,
    reference_date: NaiveDate,
    filters: &'a FilterState,
    results: Vec<&'a ResearchItem>,
}

/// Compact table row for a research item.
#[derive(Debug, Serialize)]
pub struct ResearchRow {
    pub id: u32,
    pub title: String,
    pub authors: String,
    pub date: String,
    pub category: &'static str,
    pub citations: u32,
    pub downloads: u32,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl ResearchRow {
    pub fn from_item(item: &ResearchItem, abstract_width: usize) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            authors: item.authors.clone(),
            date: item.date.to_string(),
            category: item.category.label(),
            citations: item.citations,
            downloads: item.downloads,
            abstract_text: truncate(&item.abstract_text, abstract_width),
        }
    }
}

impl Tabular for ResearchRow {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "title",
        "authors",
        "date",
        "category",
        "citations",
        "downloads",
        "abstract",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.authors.clone(),
            self.date.clone(),
            self.category.to_string(),
            self.citations.to_string(),
            self.downloads.to_string(),
            self.abstract_text.clone(),
        ]
    }
}

pub fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = filter_state_from_args(args)?;
    let view = lumen_search::derive_view(&ctx.catalog, &state, ctx.today);
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    if flags.format == OutputFormat::Table {
        println!(
            "{}",
            render_listing(&view, limit, ctx.config.browse.abstract_width)?
        );
        return Ok(());
    }

    let count = view.count();
    let mut results = view.items;
    results.truncate(limit);

    output(
        &ResearchListResponse {
            count,
            filters_active: state.has_active_filters(),
            reference_date: ctx.today,
            filters: &state,
            results,
        },
        flags.format,
    )
}

/// Build the filter state for a one-shot listing.
///
/// Each `--tag` is toggled in order, so naming a tag twice cancels it.
pub fn filter_state_from_args(args: &ListArgs) -> anyhow::Result<FilterState> {
    let mut state = FilterState {
        query: args.query.clone().unwrap_or_default(),
        category: parse_or_default(args.category.as_deref(), "category")?,
        date_window: parse_or_default(args.date_window.as_deref(), "date-window")?,
        sort_key: parse_or_default(args.sort.as_deref(), "sort")?,
        ..FilterState::default()
    };
    for tag in &args.tags {
        state.toggle_tag(tag);
    }
    Ok(state)
}

/// Table listing followed by a result-count line or the empty-state hint.
pub fn render_listing(
    view: &ResearchView<'_>,
    limit: usize,
    abstract_width: usize,
) -> anyhow::Result<String> {
    if view.is_empty() {
        return Ok(String::from(
            "No research matches the current filters. Try a broader query or clear the filters.",
        ));
    }

    let rows = view
        .iter()
        .take(limit)
        .map(|item| ResearchRow::from_item(item, abstract_width))
        .collect::<Vec<_>>();
    let table = render_rows(&rows, OutputFormat::Table)?;
    let shown = rows.len();
    let count = view.count();

    let footer = if shown < count {
        format!("Showing {shown} of {count} results")
    } else {
        format!("Showing {count} results")
    };
    Ok(format!("{table}\n\n{footer}"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use lumen_core::catalog::Catalog;
    use lumen_core::enums::{Category, CategoryFilter, DateWindow, SortKey};
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 14).unwrap()
    }

    #[test]
    fn args_map_onto_filter_state() {
        let args = ListArgs {
            query: Some("learning".into()),
            category: Some("online-learning".into()),
            tags: vec!["technology".into(), "K-12".into(), "technology".into()],
            date_window: Some("last-year".into()),
            sort: Some("citations".into()),
        };
        let state = filter_state_from_args(&args).expect("args are valid");
        assert_eq!(state.query, "learning");
        assert_eq!(state.category, CategoryFilter::Only(Category::OnlineLearning));
        assert_eq!(state.date_window, DateWindow::LastYear);
        assert_eq!(state.sort_key, SortKey::Citations);
        assert_eq!(state.active_tags.into_iter().collect::<Vec<_>>(), vec!["K-12"]);
    }

    #[test]
    fn empty_args_are_default_state() {
        let state = filter_state_from_args(&ListArgs::default()).unwrap();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn bad_category_is_reported() {
        let args = ListArgs {
            category: Some("astronomy".into()),
            ..ListArgs::default()
        };
        let err = filter_state_from_args(&args).expect_err("should fail");
        assert!(format!("{err:#}").contains("invalid --category value"));
    }

    #[test]
    fn listing_footer_reports_limit() {
        let catalog = Catalog::sample();
        let view = lumen_search::derive_view(&catalog, &FilterState::default(), today());
        let rendered = render_listing(&view, 3, 20).unwrap();
        assert!(rendered.ends_with("Showing 3 of 9 results"));
        assert_eq!(rendered.lines().count(), 2 + 3 + 2);
    }

    #[test]
    fn empty_listing_renders_hint() {
        let catalog = Catalog::sample();
        let state = FilterState {
            query: "quantum".into(),
            ..FilterState::default()
        };
        let view = lumen_search::derive_view(&catalog, &state, today());
        let rendered = render_listing(&view, 20, 20).unwrap();
        assert!(rendered.starts_with("No research matches"));
    }

    #[test]
    fn row_truncates_abstract() {
        let catalog = Catalog::sample();
        let row = ResearchRow::from_item(catalog.get(1).unwrap(), 10);
        assert_eq!(row.abstract_text.chars().count(), 10);
        assert_eq!(row.category, "Educational Technology");
        assert_eq!(row.date, "Jan 2023");
    }
}
