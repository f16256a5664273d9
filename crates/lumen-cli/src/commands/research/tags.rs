use lumen_search::FilterState;
use lumen_search::tags::{TagChip, common_tags};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Tabular, output_rows};

impl Tabular for TagChip {
    const HEADERS: &'static [&'static str] = &["tag", "active"];

    fn cells(&self) -> Vec<String> {
        vec![self.tag.clone(), self.active.to_string()]
    }
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = flags.limit.map_or(ctx.config.browse.tag_cloud_size, |limit| {
        usize::try_from(limit).unwrap_or(usize::MAX)
    });
    let chips = common_tags(&ctx.catalog, &FilterState::default(), limit);
    output_rows(&chips, flags.format)
}
