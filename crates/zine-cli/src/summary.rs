use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use zine_cli::commands::decode_was_complete;
use zine_cli::types::{CheckResult, CodeRow, DecodeResult, ShowResult};
use zine_model::{SelectionState, SpecCode};

pub fn print_decode(result: &DecodeResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Before"),
        header_cell("After"),
    ]);
    apply_table_style(&mut table);
    for (group, before, after) in selection_rows(&result.prior, &result.selection) {
        let after_cell = if before == after {
            Cell::new(after)
        } else {
            Cell::new(after)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![Cell::new(group), dim_cell(before), after_cell]);
    }
    println!("Input: {:?}", result.input);
    println!("{table}");
    println!("Code: {}", result.code);
    if !decode_was_complete(result) {
        println!("Note: input was incomplete; unchanged groups kept their prior values.");
    }
}

pub fn print_show(result: &ShowResult) {
    println!("Code: {}", result.code);
    println!("Selection: {}", result.selection.describe());
    println!("Share: {}", result.share_query);
    match &result.block {
        Some(block) => {
            println!();
            println!("{}", block.title);
            for (index, step) in block.steps.iter().enumerate() {
                println!("  {}. {step}", index + 1);
            }
        }
        None => println!("No instruction block for {}; nothing displayed.", result.code),
    }
}

pub fn print_codes(rows: &[CodeRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Size"),
        header_cell("Duplex"),
        header_cell("Orientation"),
        header_cell("Spine"),
        header_cell("Instructions"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for row in rows {
        let selection = row.selection;
        let sheet_options = selection.size.uses_sheet_options();
        table.add_row(vec![
            code_cell(row.code.as_str()),
            Cell::new(selection.size),
            option_cell(sheet_options.then_some(selection.duplex.as_str())),
            Cell::new(selection.orientation),
            option_cell(sheet_options.then_some(selection.spine.as_str())),
            match &row.title {
                Some(title) => Cell::new(title),
                None => Cell::new("missing").fg(Color::Red),
            },
        ]);
    }
    println!("{table}");
}

pub fn print_check(result: &CheckResult) {
    println!(
        "Catalog blocks: {} / reachable codes: {}",
        result.blocks, result.reachable
    );
    if result.is_complete() {
        println!("Every reachable code has an instruction block.");
        return;
    }
    let missing: Vec<&str> = result.missing.iter().map(SpecCode::as_str).collect();
    eprintln!("Missing blocks ({}): {}", missing.len(), missing.join(", "));
}

fn selection_rows(
    before: &SelectionState,
    after: &SelectionState,
) -> [(&'static str, &'static str, &'static str); 4] {
    [
        ("size", before.size.as_str(), after.size.as_str()),
        ("duplex", before.duplex.as_str(), after.duplex.as_str()),
        (
            "orientation",
            before.orientation.as_str(),
            after.orientation.as_str(),
        ),
        ("spine", before.spine.as_str(), after.spine.as_str()),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
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

fn code_cell(code: &str) -> Cell {
    Cell::new(code)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn option_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
