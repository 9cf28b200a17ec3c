//! Structural normalization: merged-range resolution.

use tracing::debug;

use crate::error::{CleansheetError, Result};
use crate::input::RawSheet;
use crate::table::CellValue;

/// Resolve all merge ranges in a sheet into a flat grid.
///
/// Mirrors spreadsheet "unmerge, keep top-left value" semantics: after
/// resolution each former range holds its value at the anchor position and
/// `Empty` everywhere else it covered. The input sheet is never mutated;
/// a sheet with no ranges round-trips unchanged.
pub fn resolve_merges(sheet: &RawSheet) -> Result<RawSheet> {
    let mut out = RawSheet::from_grid(sheet.name.clone(), sheet.cells.clone());

    for range in &sheet.merges {
        if range.last_row < range.first_row || range.last_col < range.first_col {
            return Err(CleansheetError::MalformedRange(format!(
                "inverted range ({},{})..({},{})",
                range.first_row, range.first_col, range.last_row, range.last_col
            )));
        }

        let (anchor_row, anchor_col) = range.anchor();
        if anchor_row >= out.height() {
            debug!(?range, "merge range outside the used area, skipping");
            continue;
        }

        let value = sheet.get(anchor_row, anchor_col).clone();
        for row in range.first_row..=range.last_row.min(out.height().saturating_sub(1)) {
            let cells = &mut out.cells[row];
            for col in range.first_col..=range.last_col {
                if col >= cells.len() {
                    break;
                }
                cells[col] = if (row, col) == (anchor_row, anchor_col) {
                    value.clone()
                } else {
                    CellValue::Empty
                };
            }
        }
    }

    out.merges.clear();
    Ok(out)
}
