use lumen_core::catalog::Catalog;
use lumen_core::enums::CategoryFilter;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Tabular, output_rows};

/// One entry of the category selector.
#[derive(Debug, Serialize)]
struct CategoryOption {
    token: &'static str,
    label: &'static str,
    items: usize,
}

impl Tabular for CategoryOption {
    const HEADERS: &'static [&'static str] = &["token", "label", "items"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.token.to_string(),
            self.label.to_string(),
            self.items.to_string(),
        ]
    }
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_rows(&category_options(&ctx.catalog), flags.format)
}

fn category_options(catalog: &Catalog) -> Vec<CategoryOption> {
    let all = CategoryFilter::All;
    std::iter::once(CategoryOption {
        token: all.as_str(),
        label: all.label(),
        items: catalog.len(),
    })
    .chain(
        catalog
            .category_counts()
            .into_iter()
            .map(|(category, items)| CategoryOption {
                token: category.as_str(),
                label: category.label(),
                items,
            }),
    )
    .collect()
}
