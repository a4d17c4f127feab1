use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Row as ComfyRow, Table};
use serde::Serialize;
use terminal_size::{Width as TermWidth, terminal_size};

use super::{Cli, OutputFormat};

pub(super) trait TableRow {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

fn terminal_width() -> Option<u16> {
    if let Ok(cols) = std::env::var("COLUMNS")
        && let Ok(v) = cols.parse::<u16>()
    {
        return Some(v);
    }
    terminal_size().map(|(TermWidth(w), _)| w)
}

/// Summary text for `rows` in the format selected on the command line.
pub(super) fn format_summary<T: Serialize + TableRow>(
    cli: &Cli,
    rows: Vec<T>,
) -> anyhow::Result<String> {
    match cli.output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::DynamicFullWidth);

            if let Some(w) = terminal_width() {
                table.set_width(w);
            }

            table.set_header(ComfyRow::from(
                T::HEADERS
                    .iter()
                    .map(|h| header_cell(cli, h))
                    .collect::<Vec<_>>(),
            ));
            for row in rows {
                table.add_row(ComfyRow::from(row.cells()));
            }
            Ok(table.to_string())
        }
    }
}

fn header_cell(cli: &Cli, text: &str) -> Cell {
    if super::should_color(cli) {
        Cell::new(text)
            .add_attribute(Attribute::Bold)
            .fg(Color::Cyan)
    } else {
        Cell::new(text)
    }
}
