use lumen_core::entities::ResearchItem;
use lumen_search::FilterState;
use lumen_search::tags::TagChip;
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::output::output;

/// Handle `lmn schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for_target(args.target), flags.format)
}

fn schema_for_target(target: SchemaTarget) -> Schema {
    match target {
        SchemaTarget::ResearchItem => schema_for!(ResearchItem),
        SchemaTarget::FilterState => schema_for!(FilterState),
        SchemaTarget::TagChip => schema_for!(TagChip),
    }
}
