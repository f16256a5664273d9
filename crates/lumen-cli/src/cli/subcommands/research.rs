use clap::{Args, Subcommand};

/// Research catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResearchCommands {
    /// List research items matching the given filters.
    List(ListArgs),
    /// Get a research item by ID.
    Get { id: u32 },
    /// Show the quick-filter tags.
    Tags,
    /// Show the category selector options.
    Categories,
    /// Interactive session reading filter commands from stdin.
    Browse,
}

#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// Free-text query over title, abstract, authors, and tags.
    #[arg(long)]
    pub query: Option<String>,
    /// Category token, or `all`.
    #[arg(long)]
    pub category: Option<String>,
    /// Tag to toggle on (repeatable).
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    /// newest, oldest, last-month, last-year
    #[arg(long)]
    pub date_window: Option<String>,
    /// relevance, citations, downloads, recent
    #[arg(long)]
    pub sort: Option<String>,
}
