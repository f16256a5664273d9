use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let item = ctx.catalog.get(id)?;
    output(item, flags.format)
}
