use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::model::{MatchResult, SheetGrid};

/// Sheet name of the unmatched-rows artifact.
pub const UNMATCHED_SHEET: &str = "NotMatch";

/// Writes every unmatched source row verbatim into a freshly created
/// single-sheet workbook. Cells keep their original column index so the
/// artifact lines up with the source layout; empty cells stay blank.
pub fn write_unmatched(path: &Path, grid: &SheetGrid, unmatched: &[MatchResult]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(UNMATCHED_SHEET)?;

    for (out_row, result) in unmatched.iter().enumerate() {
        if let Some(row) = grid.row(result.row) {
            for (col_idx, cell) in row.cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                worksheet.write_string(out_row as u32, col_idx as u16, cell.display_text())?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
