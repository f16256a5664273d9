use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A row type with a fixed column layout for table output.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render a single serializable value. Table mode shows a key/value listing.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => render_key_values(&serde_json::to_value(value)?),
    }
}

/// Render a list of rows. Table mode uses the row type's column layout.
pub fn render_rows<T: Serialize + Tabular>(
    rows: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Raw => Ok(serde_json::to_string(rows)?),
        OutputFormat::Table => {
            if rows.is_empty() {
                return Ok(String::from("(no rows)"));
            }
            let cells = rows.iter().map(Tabular::cells).collect::<Vec<_>>();
            Ok(table::render_table(T::HEADERS, &cells, table_options()))
        }
    }
}

/// Print a serializable value in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print rows in the requested format.
pub fn output_rows<T: Serialize + Tabular>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_rows(rows, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_key_values(value: &Value) -> anyhow::Result<String> {
    let rows = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
            .collect::<Vec<_>>(),
        scalar => vec![vec![String::from("value"), value_to_cell(scalar)]],
    };
    Ok(table::render_table(&["key", "value"], &rows, table_options()))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
