//! CSV timecard reader.

use std::io::Read;

use csv::{Position, ReaderBuilder};
use tracing::debug;

use crate::config::TimecardLayout;
use crate::error::{EngineError, EngineResult};

use super::TimecardImport;
use super::row::{CellValue, RowConverter};

/// Parses a CSV timecard from any reader.
///
/// The first `layout.header_rows` lines are skipped. Rows may have differing
/// lengths; missing trailing cells read as empty. Blank lines are ignored and
/// errors report the line number in the file.
///
/// # Example
///
/// ```
/// use timecard_engine::config::TimecardLayout;
/// use timecard_engine::timecard::parse_csv;
///
/// let csv = "Position,ID,Start,End,,,,Name\n\
///            Nurse,1,01/12/2026 09:00 AM,01/12/2026 05:00 PM,,,,Jane Doe\n";
/// let import = parse_csv(csv.as_bytes(), &TimecardLayout::default()).unwrap();
/// assert_eq!(import.records.len(), 1);
/// assert_eq!(import.records[0].name, "Jane Doe");
/// ```
pub fn parse_csv<R: Read>(reader: R, layout: &TimecardLayout) -> EngineResult<TimecardImport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let converter = RowConverter::new(layout);
    let mut import = TimecardImport::default();

    for (row_idx, result) in reader.records().enumerate() {
        // Blank lines yield no record
        let fallback = row_idx + 1;
        let record = result.map_err(|e| EngineError::InvalidRecord {
            row: e.position().map_or(fallback, |p| line_number(p, fallback)),
            field: "row".to_string(),
            message: e.to_string(),
        })?;
        let row_number = record
            .position()
            .map_or(fallback, |p| line_number(p, fallback));

        if row_number <= layout.header_rows {
            continue;
        }

        let cells: Vec<CellValue> = record
            .iter()
            .map(|value| {
                if value.trim().is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(value.to_string())
                }
            })
            .collect();

        match converter.convert(row_number, &cells)? {
            Some(shift) => import.records.push(shift),
            None => import.skipped_rows += 1,
        }
    }

    debug!(
        records = import.records.len(),
        skipped_rows = import.skipped_rows,
        "Parsed CSV timecard"
    );
    Ok(import)
}

/// One-based line on which a record starts.
fn line_number(position: &Position, fallback: usize) -> usize {
    usize::try_from(position.line()).unwrap_or(fallback)
}
