use anyhow::Context;
use chrono::{Local, NaiveDate};
use lumen_config::LumenConfig;
use lumen_core::catalog::Catalog;

use crate::cli::GlobalFlags;

/// Shared state handed to every command handler.
#[derive(Debug)]
pub struct AppContext {
    pub catalog: Catalog,
    pub config: LumenConfig,
    /// Reference date for recency windows.
    pub today: NaiveDate,
}

impl AppContext {
    pub fn init(config: LumenConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let pinned = config
            .browse
            .reference_date()
            .context("failed to read browse.reference_date")?;
        let today = resolve_today(flags.today, pinned, Local::now().date_naive());
        tracing::debug!(%today, "resolved reference date");

        Ok(Self {
            catalog: Catalog::sample(),
            config,
            today,
        })
    }
}

/// Precedence: `--today` flag -> configured reference date -> local clock.
fn resolve_today(
    flag: Option<NaiveDate>,
    configured: Option<NaiveDate>,
    clock: NaiveDate,
) -> NaiveDate {
    flag.or(configured).unwrap_or(clock)
}
