use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{ReconError, Result};
use crate::model::{CellValue, RawRow, SheetGrid};

/// Loads the named sheet into an immutable grid. Row numbers are 1-based
/// sheet positions and columns are anchored to A even when the used range
/// starts further right, so cell addresses stay absolute.
pub fn read_grid(path: &Path, sheet_name: &str) -> Result<SheetGrid> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = read_required_sheet(&mut workbook, sheet_name)?;

    let (row_offset, col_offset) = range.start().unwrap_or((0, 0));
    let mut rows = Vec::new();
    for (index, cells) in range.rows().enumerate() {
        let number = row_offset + index as u32 + 1;
        let mut values = vec![CellValue::Empty; col_offset as usize];
        values.extend(cells.iter().map(convert_cell));
        rows.push(RawRow {
            number,
            cells: values,
        });
    }

    Ok(SheetGrid::new(rows))
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<calamine::Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ReconError::SheetNotFound(name.to_string()))?;
    let range = range_result.map_err(ReconError::from)?;
    Ok(range)
}

// Readers surface a hyperlink cell's cached display string, which is the
// text the extraction rule wants, so every non-empty cell maps to Text.
fn convert_cell(cell: &DataType) -> CellValue {
    match cell {
        DataType::Empty => CellValue::Empty,
        DataType::String(value) => CellValue::Text(value.clone()),
        DataType::Float(value) => CellValue::Text(value.to_string()),
        DataType::Int(value) => CellValue::Text(value.to_string()),
        DataType::Bool(value) => CellValue::Text(value.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}
