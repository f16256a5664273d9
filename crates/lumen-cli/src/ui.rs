use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

/// What the process environment says about the terminal.
#[derive(Clone, Debug, Default)]
struct Terminal {
    is_tty: bool,
    no_color: bool,
    columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, &Terminal::detect()));
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn resolve(flags: &GlobalFlags, terminal: &Terminal) -> UiPrefs {
    let tabular = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => tabular,
        ColorMode::Never => false,
        ColorMode::Auto => tabular && terminal.is_tty && !flags.quiet && !terminal.no_color,
    };

    let term_width = terminal
        .columns
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);

    UiPrefs {
        table_color,
        term_width,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color,
            today: None,
        }
    }

    fn tty() -> Terminal {
        Terminal {
            is_tty: true,
            ..Terminal::default()
        }
    }

    #[test]
    fn auto_colors_tables_on_a_terminal() {
        let prefs = resolve(&flags(OutputFormat::Table, ColorMode::Auto), &tty());
        assert!(prefs.table_color);
    }

    #[test]
    fn no_color_and_pipes_disable_auto() {
        let table = flags(OutputFormat::Table, ColorMode::Auto);
        let no_color = Terminal {
            no_color: true,
            ..tty()
        };
        assert!(!resolve(&table, &no_color).table_color);
        assert!(!resolve(&table, &Terminal::default()).table_color);
    }

    #[test]
    fn json_is_never_colored() {
        let prefs = resolve(&flags(OutputFormat::Json, ColorMode::Always), &tty());
        assert!(!prefs.table_color);
    }

    #[test]
    fn columns_below_minimum_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never);
        let wide = Terminal {
            columns: Some("120".into()),
            ..Terminal::default()
        };
        let narrow = Terminal {
            columns: Some("20".into()),
            ..Terminal::default()
        };
        assert_eq!(resolve(&table, &wide).term_width, Some(120));
        assert_eq!(resolve(&table, &narrow).term_width, None);
    }
}
