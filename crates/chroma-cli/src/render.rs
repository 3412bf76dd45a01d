use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use chroma_core::semantic;
use chroma_model::{AuditReport, Grade, Palette, PaletteSummary};

pub fn print_palette(palette: &Palette) {
    println!(
        "{}  [{}]  base={}",
        palette.name,
        palette.harmony,
        palette.base_color.hex()
    );
    println!("id: {}", palette.id);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Hex"),
        header_cell("Role"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    for swatch in &palette.colors {
        table.add_row(vec![
            Cell::new(swatch.color.hex()),
            Cell::new(swatch.role.as_str()),
            Cell::new(&swatch.name),
        ]);
    }
    println!("{table}");

    let tokens = semantic::suggest_semantic(palette);
    println!(
        "semantic: success={} warning={} error={} info={}",
        tokens.success, tokens.warning, tokens.error, tokens.info
    );
}

pub fn print_list(summaries: &[PaletteSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Harmony"),
        header_cell("Base"),
        header_cell("Created"),
    ]);
    apply_table_style(&mut table);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.id),
            Cell::new(&summary.name),
            Cell::new(summary.harmony.as_str()),
            Cell::new(summary.base_color.hex()),
            Cell::new(summary.created_at.format("%Y-%m-%d %H:%M").to_string()),
        ]);
    }
    println!("{table}");
}

pub fn print_audit(report: &AuditReport) {
    println!("{}  ({})", report.palette_name, report.palette_id);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Foreground"),
        header_cell("Background"),
        header_cell("Ratio"),
        header_cell("Grade"),
        header_cell("AA"),
        header_cell("AA-Large"),
        header_cell("AAA"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);
    for check in &report.checks {
        table.add_row(vec![
            Cell::new(format!("{} {}", check.fg.hex, check.fg.name)),
            Cell::new(format!("{} {}", check.bg.hex, check.bg.name)),
            Cell::new(format!("{:.2}", check.ratio)),
            grade_cell(check.grade),
            pass_cell(check.aa_normal),
            pass_cell(check.aa_large),
            pass_cell(check.aaa_normal),
        ]);
    }
    println!("{table}");
    println!(
        "{} checks, {} pass AA, {} fail ({}% pass rate)",
        report.summary.total, report.summary.pass_aa, report.summary.fail_aa,
        report.summary.pass_rate
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn grade_cell(grade: Grade) -> Cell {
    match grade {
        Grade::Aaa => Cell::new("AAA")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Grade::Aa => Cell::new("AA").fg(Color::Green),
        Grade::AaLarge => Cell::new("AA-Large").fg(Color::Yellow),
        Grade::Fail => Cell::new("Fail").fg(Color::Red),
    }
}

fn pass_cell(pass: bool) -> Cell {
    if pass {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red)
    }
}
