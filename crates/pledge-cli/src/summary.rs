use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pledge_model::{RunSummary, Settings};

pub fn print_summary(summary: &RunSummary, dry_run: bool) {
    println!("Output: {}", summary.output_dir.display());
    if dry_run {
        println!("Dry run: no files were written");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tier"),
        header_cell("Patrons"),
        header_cell("TXT"),
        header_cell("SVG"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    let mut total_patrons = 0usize;
    for tier in &summary.tiers {
        total_patrons += tier.patrons;
        table.add_row(vec![
            Cell::new(&tier.tier)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(tier.patrons),
            output_cell(tier.outputs.txt.as_ref()),
            output_cell(tier.outputs.svg.as_ref()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_patrons).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Count"), header_cell("Patrons")]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 1, CellAlignment::Right);
    counts.add_row(vec![
        Cell::new("Paying"),
        Cell::new(summary.total_paying)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    counts.add_row(vec![Cell::new("Free tier"), count_cell(summary.free_tier)]);
    counts.add_row(vec![
        Cell::new("Expired access"),
        count_cell(summary.expired_access),
    ]);
    counts.add_row(vec![
        Cell::new("Unpaid status"),
        count_cell(summary.unpaid_status),
    ]);
    println!("{counts}");
}

pub fn print_summary_json(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("serialize run summary")?;
    println!("{json}");
    Ok(())
}

pub fn print_settings(settings: &Settings) {
    let layout = &settings.layout;
    let overrides = layout
        .color_overrides
        .iter()
        .map(|(name, color)| format!("{name}:{color}"))
        .collect::<Vec<_>>()
        .join(",");
    let rows = [
        ("EXPORT_SVG", settings.export_svg.to_string()),
        ("EXPORT_TXT", settings.export_txt.to_string()),
        ("OUTPUT_DIR", settings.output_dir.clone()),
        ("DEFAULT_CSV_FILE", settings.default_csv_file.clone()),
        ("SVG_WIDTH", layout.width.to_string()),
        ("SVG_MARGIN_TO_EDGE", layout.margin.to_string()),
        ("SVG_COLUMN_GAP", layout.column_gap.to_string()),
        ("SVG_FONTSIZE", layout.font_size.to_string()),
        ("SVG_LINEHEIGHT", layout.line_height.to_string()),
        ("SVG_COLUMNS", layout.columns.to_string()),
        ("SVG_FONTFAMILY", layout.font_family.clone()),
        ("SVG_COLUMN_COLORS", layout.palette.join(",")),
        ("SVG_RANDOMIZE_COLORS", layout.randomize_colors.to_string()),
        ("USER_COLOR_MAP", overrides),
    ];
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (key, value) in rows {
        let value_cell = if value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(value)
        };
        table.add_row(vec![Cell::new(key).fg(Color::Blue), value_cell]);
    }
    println!("{table}");
}

pub fn print_settings_json(settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings).context("serialize settings")?;
    println!("{json}");
    Ok(())
}

fn output_cell(path: Option<&PathBuf>) -> Cell {
    match path {
        Some(_) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
