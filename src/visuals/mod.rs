mod formatters;

use crate::commands::stats::ConversionStats;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_bytes, format_offset};

pub fn print_summary(stats: &ConversionStats) {
    println!("Conversion complete. XDF file created: {}", stats.output);
}

pub fn print_detailed(stats: &ConversionStats) {
    print_summary(stats);

    let mut summary_table = Table::new();
    summary_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Conversion Summary")
                .add_attribute(Attribute::Bold)
                .set_alignment(comfy_table::CellAlignment::Left),
            Cell::new(""),
        ]);

    summary_table.add_row(vec![
        "Conversion Time",
        &format!("{}ms", stats.total_duration.as_millis()),
    ]);
    summary_table.add_row(vec!["Base Offset", &format_offset(stats.base_offset)]);
    summary_table.add_row(vec!["Categories", &stats.categories.len().to_string()]);
    summary_table.add_row(vec!["Tables", &stats.tables.to_string()]);
    summary_table.add_row(vec!["X/Y Axes", &stats.axes.to_string()]);
    summary_table.add_row(vec!["Output Size", &format_bytes(stats.bytes_written)]);

    println!("{summary_table}\n");

    let mut detail_table = Table::new();
    detail_table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Index").add_attribute(Attribute::Bold),
            Cell::new("Tables").add_attribute(Attribute::Bold),
        ]);

    for category in &stats.categories {
        detail_table.add_row(vec![
            Cell::new(&category.name),
            Cell::new(format!("0x{:X}", category.index)),
            Cell::new(category.tables),
        ]);
    }

    println!("{detail_table}");
}
