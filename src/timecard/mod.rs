//! Timecard adapter.
//!
//! Reads shift rows out of a timecard export and converts them into
//! [`ShiftRecord`]s ready for analysis. Excel workbooks (`.xlsx`, `.xlsm`)
//! and CSV files are supported; the column layout comes from
//! [`TimecardLayout`](crate::config::TimecardLayout).
//!
//! Rows without a start or end time are dropped and counted. A timestamp
//! that is present but unreadable rejects the whole import.

mod csv_sheet;
mod row;
mod xlsx_sheet;

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::TimecardLayout;
use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

pub use csv_sheet::parse_csv;
pub use row::{parse_timestamp, CellValue, RowConverter};
pub use xlsx_sheet::{convert_range, read_xlsx};

/// The shift records read from one timecard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimecardImport {
    /// Records in sheet order.
    pub records: Vec<ShiftRecord>,
    /// Data rows dropped for lacking a start or end time.
    pub skipped_rows: usize,
}

/// Reads a timecard file, choosing the reader from the file extension.
///
/// # Errors
///
/// - [`EngineError::UnsupportedFormat`] for extensions other than
///   `xlsx`, `xlsm` and `csv`
/// - [`EngineError::TimecardRead`] if the file cannot be opened
/// - [`EngineError::InvalidRecord`] if a row holds an unreadable timestamp
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::TimecardLayout;
/// use timecard_engine::timecard::read_timecard;
///
/// let import = read_timecard("Assignment_Timecard.xlsx", &TimecardLayout::default())?;
/// println!("{} shifts", import.records.len());
/// # Ok::<(), timecard_engine::error::EngineError>(())
/// ```
pub fn read_timecard<P: AsRef<Path>>(
    path: P,
    layout: &TimecardLayout,
) -> EngineResult<TimecardImport> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let import = match extension.as_str() {
        "xlsx" | "xlsm" => read_xlsx(path, layout)?,
        "csv" => {
            let file = File::open(path).map_err(|e| EngineError::TimecardRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            parse_csv(file, layout)?
        }
        _ => return Err(EngineError::UnsupportedFormat { extension }),
    };

    info!(
        path = %path.display(),
        records = import.records.len(),
        skipped_rows = import.skipped_rows,
        "Successfully parsed timecard"
    );
    Ok(import)
}
