//! Conversion of timecard rows into shift records.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::TimecardLayout;
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

/// A single cell value as read from a sheet, before field conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing or empty cell.
    Empty,
    /// Any textual value, timestamps included.
    Text(String),
    /// A cell the sheet already stores as a date and time.
    DateTime(NaiveDateTime),
}

impl CellValue {
    fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::DateTime(_) => false,
        }
    }

    fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(text) => text.trim().to_string(),
            CellValue::DateTime(value) => value.to_string(),
        }
    }
}

/// Converts rows of [`CellValue`]s into [`ShiftRecord`]s using a layout.
pub struct RowConverter<'a> {
    layout: &'a TimecardLayout,
}

impl<'a> RowConverter<'a> {
    /// Creates a converter for the given layout.
    pub fn new(layout: &'a TimecardLayout) -> Self {
        Self { layout }
    }

    /// Converts one row.
    ///
    /// `row_number` is the one-based row in the source sheet and only used
    /// for logging and errors. Returns `Ok(None)` for rows that are blank or
    /// lack a start or end timestamp; such rows are dropped, not rejected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] when a timestamp cell holds
    /// text that matches none of the layout's formats.
    pub fn convert(
        &self,
        row_number: usize,
        cells: &[CellValue],
    ) -> EngineResult<Option<ShiftRecord>> {
        if cells.iter().all(CellValue::is_blank) {
            return Ok(None);
        }

        let columns = &self.layout.columns;
        let start = self.timestamp(row_number, "start", cell_at(cells, columns.start))?;
        let end = self.timestamp(row_number, "end", cell_at(cells, columns.end))?;

        let (Some(start), Some(end)) = (start, end) else {
            debug!(row = row_number, "Skipping row without start or end time");
            return Ok(None);
        };

        Ok(Some(ShiftRecord::new(
            cell_at(cells, columns.name).to_text(),
            cell_at(cells, columns.position).to_text(),
            start,
            end,
        )))
    }

    fn timestamp(
        &self,
        row_number: usize,
        field: &str,
        cell: &CellValue,
    ) -> EngineResult<Option<NaiveDateTime>> {
        match cell {
            CellValue::DateTime(value) => Ok(Some(*value)),
            CellValue::Empty => Ok(None),
            CellValue::Text(text) if text.trim().is_empty() => Ok(None),
            CellValue::Text(text) => parse_timestamp(text, &self.layout.datetime_formats)
                .map(Some)
                .ok_or_else(|| EngineError::InvalidRecord {
                    row: row_number,
                    field: field.to_string(),
                    message: format!("unrecognised datetime '{}'", text.trim()),
                }),
        }
    }
}

/// Parses a timestamp with the first matching format.
///
/// # Example
///
/// ```
/// use timecard_engine::timecard::parse_timestamp;
///
/// let formats = vec!["%m/%d/%Y %I:%M %p".to_string()];
/// let parsed = parse_timestamp("01/12/2026 09:00 PM", &formats).unwrap();
/// assert_eq!(parsed.to_string(), "2026-01-12 21:00:00");
/// ```
pub fn parse_timestamp(text: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let text = text.trim();
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

static EMPTY_CELL: CellValue = CellValue::Empty;

fn cell_at(cells: &[CellValue], column: usize) -> &CellValue {
    cells.get(column).unwrap_or(&EMPTY_CELL)
}
