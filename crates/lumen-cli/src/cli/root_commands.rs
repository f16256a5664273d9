use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::ResearchCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Research catalog.
    Research {
        #[command(subcommand)]
        action: ResearchCommands,
    },
    /// Print the JSON Schema of a public type.
    Schema(SchemaArgs),
}

/// Types whose schema can be printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    ResearchItem,
    FilterState,
    TagChip,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe.
    pub target: SchemaTarget,
}
