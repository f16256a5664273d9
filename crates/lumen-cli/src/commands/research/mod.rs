mod browse;
mod categories;
mod get;
mod list;
mod tags;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResearchCommands;
use crate::context::AppContext;

/// Handle `lmn research`.
pub fn handle(
    action: &ResearchCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ResearchCommands::List(args) => list::run(args, ctx, flags),
        ResearchCommands::Get { id } => get::run(*id, ctx, flags),
        ResearchCommands::Tags => tags::run(ctx, flags),
        ResearchCommands::Categories => categories::run(ctx, flags),
        ResearchCommands::Browse => browse::run(ctx, flags),
    }
}
