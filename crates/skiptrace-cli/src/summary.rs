use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use skiptrace_map::{AliasTable, ResolutionReport};
use skiptrace_submit::RunInput;
use skiptrace_transform::preview;

use skiptrace_cli::pipeline::{PreparedBatch, SubmitOutcome, dry_run_body};

pub fn print_resolution(report: &ResolutionReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Alias"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for resolution in &report.fields {
        let field = Cell::new(resolution.field.label())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold);
        match &resolution.matched {
            Some(found) => table.add_row(vec![
                field,
                Cell::new(&found.column),
                dim_cell(&found.alias),
                score_cell(found.score),
            ]),
            None => table.add_row(vec![
                field,
                Cell::new("not found")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                dim_cell("-"),
                dim_cell("-"),
            ]),
        };
    }
    println!("{table}");
}

pub fn print_batch(batch: &PreparedBatch, limit: usize) {
    println!("File: {}", batch.source.display());
    print_resolution(&batch.report);
    print_preview(&batch.addresses, limit);
}

pub fn print_preview(addresses: &[String], limit: usize) {
    let shown = preview(addresses, limit);
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Formatted address")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, address) in shown.iter().enumerate() {
        table.add_row(vec![dim_cell(idx + 1), Cell::new(address)]);
    }
    println!("Preview of formatted inputs:");
    println!("{table}");
    if addresses.len() > shown.len() {
        println!(
            "... {} more ({} addresses total)",
            addresses.len() - shown.len(),
            addresses.len()
        );
    }
}

pub fn print_aliases(aliases: &AliasTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Code"),
        header_cell("Aliases (priority order)"),
    ]);
    apply_table_style(&mut table);
    for (field, list) in aliases.iter() {
        table.add_row(vec![
            Cell::new(field.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(field.code()),
            Cell::new(list.join(", ")),
        ]);
    }
    println!("{table}");
}

/// Prints the request body that would be sent.
pub fn print_dry_run(input: &RunInput) -> serde_json::Result<()> {
    println!("Dry run, request body:");
    println!("{}", dry_run_body(input)?);
    Ok(())
}

pub fn print_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Started(run) => {
            println!("Actor started successfully!");
            println!("Submitted: {} addresses", run.submitted);
            if let Some(id) = &run.run_id {
                println!("Run: {id}");
            }
            println!("Status: {}", run.status_url);
        }
        SubmitOutcome::DryRun { addresses } => {
            println!("Dry run: {addresses} addresses not submitted");
        }
        SubmitOutcome::Rejected { status, body } => {
            eprintln!("Failed to trigger actor (HTTP {status}):");
            eprintln!("{body}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn score_cell(score: f64) -> Cell {
    let text = format!("{:.0}%", score * 100.0);
    if score >= 0.95 {
        Cell::new(text).fg(Color::Green)
    } else {
        Cell::new(text).fg(Color::Yellow)
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
