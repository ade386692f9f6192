//! Excel timecard reader.
//!
//! Reads the first worksheet of an `.xlsx` workbook with `calamine`. Cells
//! are addressed by absolute sheet position so leading empty rows or columns
//! do not shift the layout.

use std::path::Path;

use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use tracing::debug;

use crate::config::TimecardLayout;
use crate::error::{EngineError, EngineResult};

use super::TimecardImport;
use super::row::{CellValue, RowConverter};

/// Reads a timecard from the first worksheet of an Excel workbook.
pub fn read_xlsx(path: &Path, layout: &TimecardLayout) -> EngineResult<TimecardImport> {
    let path_str = path.display().to_string();
    let read_error = |message: String| EngineError::TimecardRead {
        path: path_str.clone(),
        message,
    };

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| read_error(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| read_error("workbook has no worksheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| read_error(e.to_string()))?;

    let import = convert_range(&range, layout)?;
    debug!(
        path = %path_str,
        sheet = %sheet_name,
        records = import.records.len(),
        skipped_rows = import.skipped_rows,
        "Parsed Excel timecard"
    );
    Ok(import)
}

/// Converts every data row of a worksheet range.
///
/// # Errors
///
/// Returns [`EngineError::InvalidLayout`] if the layout cannot address a
/// worksheet, or [`EngineError::InvalidRecord`] for an unreadable timestamp.
pub fn convert_range(range: &Range<Data>, layout: &TimecardLayout) -> EngineResult<TimecardImport> {
    layout.validate()?;

    let mut import = TimecardImport::default();
    let Some((last_row, _)) = range.end() else {
        return Ok(import);
    };

    let converter = RowConverter::new(layout);
    let first_row = sheet_index(layout.header_rows, "header_rows")?;
    let last_column = sheet_index(layout.max_column(), "column")?;
    let start_column = sheet_index(layout.columns.start, "start column")?;
    let end_column = sheet_index(layout.columns.end, "end column")?;

    for row in first_row..=last_row {
        let cells: Vec<CellValue> = (0..=last_column)
            .map(|column| {
                let cell = range.get_value((row, column));
                if column == start_column || column == end_column {
                    timestamp_cell(cell)
                } else {
                    text_cell(cell)
                }
            })
            .collect();

        match converter.convert(row as usize + 1, &cells)? {
            Some(shift) => import.records.push(shift),
            None => import.skipped_rows += 1,
        }
    }

    Ok(import)
}

fn sheet_index(value: usize, setting: &str) -> EngineResult<u32> {
    u32::try_from(value).map_err(|_| EngineError::InvalidLayout {
        message: format!("{} {} is outside the sheet", setting, value),
    })
}

/// Reads a cell that holds a name or position.
fn text_cell(cell: Option<&Data>) -> CellValue {
    match cell {
        None | Some(Data::Empty) => CellValue::Empty,
        Some(value) => CellValue::Text(value.to_string()),
    }
}

/// Reads a cell that holds a timestamp, either native or as text.
fn timestamp_cell(cell: Option<&Data>) -> CellValue {
    match cell {
        None | Some(Data::Empty) => CellValue::Empty,
        Some(Data::String(text)) => CellValue::Text(text.clone()),
        Some(value) => match value.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::Text(value.to_string()),
        },
    }
}
