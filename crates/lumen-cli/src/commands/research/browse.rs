//! `lmn research browse`: an interactive filter session over stdin.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use lumen_core::enums::{CategoryFilter, DateWindow, SortKey};
use lumen_search::ResearchBrowser;

use super::list::render_listing;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{render, render_rows};

const HELP: &str = "\
commands:
  query <text>       set the search text (no text clears it)
  category <token>   all, educational-technology, online-learning, ...
  window <token>     newest, oldest, last-month, last-year
  sort <token>       relevance, citations, downloads, recent
  tag <tag>          toggle a tag filter
  tags               show quick-filter tags
  clear              reset every filter
  show               print the current listing
  state              print the current filters
  help               print this help
  quit               end the session";

/// One line of session input.
#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Query(String),
    Category(CategoryFilter),
    Window(DateWindow),
    Sort(SortKey),
    Tag(String),
    Tags,
    Clear,
    Show,
    State,
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse a line. Blank lines yield `None`.
    fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "query" | "q" => Self::Query(rest.to_string()),
            "category" | "c" => Self::Category(required(rest, verb)?.parse()?),
            "window" | "w" => Self::Window(required(rest, verb)?.parse()?),
            "sort" | "s" => Self::Sort(required(rest, verb)?.parse()?),
            "tag" | "t" => Self::Tag(required(rest, verb)?.to_string()),
            "tags" => Self::Tags,
            "clear" => Self::Clear,
            "show" | "ls" => Self::Show,
            "state" => Self::State,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => anyhow::bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(Some(command))
    }

    /// Whether the command changes the filters.
    const fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Query(_)
                | Self::Category(_)
                | Self::Window(_)
                | Self::Sort(_)
                | Self::Tag(_)
                | Self::Clear
        )
    }
}

fn required<'a>(rest: &'a str, verb: &str) -> anyhow::Result<&'a str> {
    if rest.is_empty() {
        anyhow::bail!("'{verb}' needs an argument");
    }
    Ok(rest)
}

/// Rendering knobs for a session.
#[derive(Clone, Copy, Debug)]
struct SessionOptions {
    format: OutputFormat,
    limit: usize,
    abstract_width: usize,
    tag_cloud_size: usize,
    prompt: bool,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = SessionOptions {
        format: flags.format,
        limit: crate::commands::shared::limit::effective_limit(
            flags.limit,
            ctx.config.general.default_limit,
        ),
        abstract_width: ctx.config.browse.abstract_width,
        tag_cloud_size: ctx.config.browse.tag_cloud_size,
        prompt: !flags.quiet,
    };
    let mut browser = ResearchBrowser::new(&ctx.catalog, ctx.today);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut browser, stdin.lock(), &mut stdout.lock(), options)
}

fn run_session<R: BufRead, W: Write>(
    browser: &mut ResearchBrowser<'_>,
    input: R,
    out: &mut W,
    options: SessionOptions,
) -> anyhow::Result<()> {
    if options.prompt {
        writeln!(out, "{} results. Type 'help' for commands.", browser.count())?;
    }

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        let command = match BrowseCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(out, "error: {error:#}")?;
                continue;
            }
        };

        if command == BrowseCommand::Quit {
            break;
        }
        let mutates = command.mutates();
        apply(browser, command, out, options)?;
        if mutates {
            writeln!(out, "{} results", browser.count())?;
        }
    }

    Ok(())
}

fn apply<W: Write>(
    browser: &mut ResearchBrowser<'_>,
    command: BrowseCommand,
    out: &mut W,
    options: SessionOptions,
) -> anyhow::Result<()> {
    match command {
        BrowseCommand::Query(query) => browser.set_query(query),
        BrowseCommand::Category(category) => browser.set_category(category),
        BrowseCommand::Window(window) => browser.set_date_window(window),
        BrowseCommand::Sort(sort_key) => browser.set_sort_key(sort_key),
        BrowseCommand::Tag(tag) => {
            let active = browser.toggle_tag(&tag);
            writeln!(out, "tag '{tag}' {}", if active { "on" } else { "off" })?;
        }
        BrowseCommand::Clear => browser.clear(),
        BrowseCommand::Tags => {
            let chips = browser.tag_chips(options.tag_cloud_size);
            writeln!(out, "{}", render_rows(&chips, options.format)?)?;
        }
        BrowseCommand::Show => {
            let view = browser.view();
            let rendered = match options.format {
                OutputFormat::Table => {
                    render_listing(&view, options.limit, options.abstract_width)?
                }
                format => {
                    let results = view.iter().take(options.limit).collect::<Vec<_>>();
                    render(&results, format)?
                }
            };
            writeln!(out, "{rendered}")?;
        }
        BrowseCommand::State => writeln!(out, "{}", render(browser.state(), options.format)?)?,
        BrowseCommand::Help => writeln!(out, "{HELP}")?,
        BrowseCommand::Quit => {}
    }
    Ok(())
}
