use crate::types::CellValue;

/// Comment column text: the cell stringified and trimmed
pub fn normalize_comment(cell: &CellValue) -> String {
    cell.to_text().trim().to_string()
}
