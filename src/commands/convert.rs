use std::time::Instant;

use super::stats::ConversionStats;
use crate::error::ConversionError;
use crate::layout;
use crate::writer::write_xdf;
use crate::xdf::build_document;

/// Converts the map description at `json_path` into an XDF file at `xdf_path`.
/// Nothing is written unless the input and the offset both parse.
pub fn convert(
    json_path: &str,
    xdf_path: &str,
    base_offset_hex: &str,
) -> Result<ConversionStats, ConversionError> {
    let started = Instant::now();

    let (document, base_offset) = layout::load(json_path, base_offset_hex)?;
    let root = build_document(&document, json_path, base_offset);
    let bytes_written = write_xdf(&root, xdf_path)?;

    let mut stats = ConversionStats::collect(&document, base_offset);
    stats.output = xdf_path.to_string();
    stats.bytes_written = bytes_written;
    stats.total_duration = started.elapsed();

    tracing::info!(
        "Converted {} tables in {} categories into {}",
        stats.tables,
        stats.categories.len(),
        xdf_path
    );
    Ok(stats)
}
