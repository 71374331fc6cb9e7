//! Spreadsheet importer - workbook rows → `RawRow`s

use crate::error::{ChirpError, ChirpResult};
use crate::types::{CellValue, RawRow};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::{Path, PathBuf};

/// Number of leading columns that make up a frequency-list row
pub const ROW_WIDTH: u32 = 5;

/// Anything that can hand the converter its input rows
pub trait RowSource {
    fn rows(&mut self) -> ChirpResult<Vec<RawRow>>;
}

impl RowSource for Vec<RawRow> {
    fn rows(&mut self) -> ChirpResult<Vec<RawRow>> {
        Ok(std::mem::take(self))
    }
}

/// Reads a frequency list from .xlsx, .xlsm, .xls, .xlsb or .ods
pub struct WorkbookImporter {
    path: PathBuf,
    sheet: Option<String>,
}

impl WorkbookImporter {
    /// Importer for the first worksheet of `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: None,
        }
    }

    /// Read the named worksheet instead of the first one
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Load every row of the selected worksheet
    pub fn import(&self) -> ChirpResult<Vec<RawRow>> {
        let mut workbook = open_workbook_auto(&self.path)?;

        let range = match &self.sheet {
            Some(name) => {
                if !workbook.sheet_names().iter().any(|s| s == name) {
                    return Err(ChirpError::SheetNotFound(name.clone()));
                }
                workbook.worksheet_range(name)?
            }
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| ChirpError::SheetNotFound("(first sheet)".to_string()))??,
        };

        let rows = Self::read_rows(&range);
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "read worksheet");
        Ok(rows)
    }

    /// Convert a worksheet range into rows, addressing cells by absolute column
    fn read_rows(range: &Range<Data>) -> Vec<RawRow> {
        let (Some((first_row, _)), Some((last_row, _))) = (range.start(), range.end()) else {
            return Vec::new();
        };

        (first_row..=last_row)
            .map(|row| {
                RawRow::from_cells(
                    (0..ROW_WIDTH).map(|col| {
                        range
                            .get_value((row, col))
                            .map(convert_cell)
                            .unwrap_or_default()
                    }),
                )
            })
            .collect()
    }
}

impl RowSource for WorkbookImporter {
    fn rows(&mut self) -> ChirpResult<Vec<RawRow>> {
        self.import()
    }
}

/// Reduce a calamine cell to a `CellValue`
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => {
            CellValue::Text(cell.to_string())
        }
        _ => CellValue::Empty,
    }
}
