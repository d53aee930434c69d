//! Renderers behind the `--output` flag.
//!
//! Handlers never print directly: they build a string here and pass it to
//! [`print_output`], which is the one place quiet mode is honored. The
//! structured formats (json, yaml) serialize the domain values themselves,
//! so they carry every field; the table and plain views work from the
//! strings the handler supplies.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

/// Whether ANSI color should be emitted, honoring `--color` and `NO_COLOR`.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Render a collection in the selected format.
///
/// `to_row` feeds the table view; `id_fn` feeds the plain view, one
/// identifier per line for piping into other tools.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            table_string(&rows)
        }
        OutputFormat::Json => json_string(data, false),
        OutputFormat::JsonCompact => json_string(data, true),
        OutputFormat::Yaml => yaml_string(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render one item in the selected format.
///
/// Detail views are hand-formatted key/value blocks rather than one-row
/// tables, so the table arm takes a `detail_fn` instead of a `Tabled` bound.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => json_string(data, false),
        OutputFormat::JsonCompact => json_string(data, true),
        OutputFormat::Yaml => yaml_string(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Write rendered output to stdout, unless `--quiet` suppressed it.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn table_string<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// Serializing CLI-owned types cannot realistically fail; if it ever does,
// surface the message as the output rather than aborting mid-print.

fn json_string<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let result = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    result.unwrap_or_else(|e| format!("serialization failed: {e}"))
}

fn yaml_string<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_else(|e| format!("serialization failed: {e}"))
}
