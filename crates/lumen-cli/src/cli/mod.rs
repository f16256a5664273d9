use chrono::NaiveDate;
use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lmn` binary.
#[derive(Debug, Parser)]
#[command(name = "lmn", version, about = "Lumen - research catalog browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Reference date for recency windows (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true, value_parser = parse_day)]
    pub today: Option<NaiveDate>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            today: self.today,
        }
    }
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| format!("expected YYYY-MM-DD: {error}"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::{CommandFactory, Parser};

    use super::subcommands::ResearchCommands;
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "lmn",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "research",
            "categories",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Research {
                action: ResearchCommands::Categories
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lmn", "research", "tags", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["lmn", "--format", "xml", "research", "tags"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn today_flag_parses_iso_date() {
        let cli = Cli::try_parse_from(["lmn", "--today", "2023-10-14", "research", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.today, NaiveDate::from_ymd_opt(2023, 10, 14));
        assert_eq!(flags.color, ColorMode::Auto);
    }

    #[test]
    fn today_flag_rejects_other_formats() {
        let parsed = Cli::try_parse_from(["lmn", "--today", "Oct 2023", "research", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn list_collects_repeated_tags() {
        let cli = Cli::try_parse_from([
            "lmn",
            "research",
            "list",
            "--tag",
            "technology",
            "--tag",
            "K-12",
            "--sort",
            "downloads",
        ])
        .expect("cli should parse");

        let Commands::Research {
            action: ResearchCommands::List(args),
        } = cli.command
        else {
            panic!("expected research list");
        };
        assert_eq!(args.tags, vec!["technology", "K-12"]);
        assert_eq!(args.sort.as_deref(), Some("downloads"));
    }
}
