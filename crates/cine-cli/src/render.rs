use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use cine_engine::TitleView;
use cine_model::FieldMap;

pub const NO_RESULTS: &str = "No results found.";

/// Separator between facets on a card line.
const BULLET: &str = " \u{2022} ";

/// Result grid; cells equal to `placeholder` are dimmed.
pub fn results_table(views: &[TitleView], placeholder: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Title"),
        header_cell("Type"),
        header_cell("Genres"),
        header_cell("Year"),
        header_cell("Decade"),
        header_cell("Platforms"),
        header_cell("Duration"),
        header_cell("Seasons"),
    ]);
    apply_results_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Center);
    for view in views {
        table.add_row(vec![
            Cell::new(&view.title).add_attribute(Attribute::Bold),
            Cell::new(&view.content_type),
            Cell::new(view.genres.join(", ")),
            Cell::new(view.year_text()),
            Cell::new(&view.decade),
            platform_cell(&view.platforms),
            value_cell(&view.duration, placeholder),
            value_cell(&view.seasons, placeholder),
        ]);
    }
    table
}

/// Plain-text result cards, one block per title, blank line between blocks.
pub fn render_cards(views: &[TitleView]) -> String {
    views
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_card(view: &TitleView) -> String {
    let genres = view.genres.join(", ");
    let year = view.year_text();
    let mut lines = vec![view.title.clone()];
    for facets in [
        join_present(&[view.content_type.as_str(), genres.as_str()]),
        join_present(&[year.as_str(), view.decade.as_str(), view.platforms.as_str()]),
    ] {
        if !facets.is_empty() {
            lines.push(format!("  {facets}"));
        }
    }
    lines.push(format!(
        "  Duration: {}   Seasons: {}",
        view.duration, view.seasons
    ));
    if !view.description.trim().is_empty() {
        lines.push(format!("  {}", view.description.trim()));
    }
    lines.join("\n")
}

fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(BULLET)
}

/// JSON document with the shown titles and the match count before capping.
pub fn render_json(views: &[TitleView], total: usize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "total": total,
        "shown": views.len(),
        "titles": views,
    }))
}

pub fn footer(shown: usize, total: usize) -> String {
    if shown < total {
        format!("showing {shown} of {total} titles")
    } else {
        format!("{total} titles")
    }
}

pub fn fields_table(fields: &FieldMap) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Index"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (field, column) in fields.entries() {
        let row = match column {
            Some(column) => vec![
                Cell::new(field.as_str())
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(&column.header),
                Cell::new(column.index),
            ],
            None => vec![
                Cell::new(field.as_str()).fg(Color::DarkGrey),
                dim_cell("absent"),
                dim_cell("-"),
            ],
        };
        table.add_row(row);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn platform_cell(platforms: &str) -> Cell {
    if platforms.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(platforms).fg(Color::Green)
    }
}

fn value_cell(value: &str, placeholder: &str) -> Cell {
    if value == placeholder {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
