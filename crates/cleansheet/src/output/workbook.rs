//! Workbook (XLSX) serialization.

use rust_xlsxwriter::{Format, Workbook};

use crate::error::Result;
use crate::table::{CellValue, Dataset};

/// Serialize a dataset as an XLSX workbook, header row first.
///
/// Numbers, booleans and dates are written as typed cells (dates with a
/// `yyyy-mm-dd` number format); empty and not-a-date cells are left blank.
pub fn write_workbook(data: &Dataset) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let worksheet = workbook.add_worksheet();

    for (col, column) in data.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, &column.name)?;
    }

    for (r, row) in data.rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match cell {
                CellValue::Empty | CellValue::NotADate => {}
                CellValue::Text(s) => {
                    if !s.is_empty() {
                        worksheet.write_string(r, c, s)?;
                    }
                }
                CellValue::Number(n) => {
                    worksheet.write_number(r, c, *n)?;
                }
                CellValue::Bool(b) => {
                    worksheet.write_boolean(r, c, *b)?;
                }
                CellValue::Date(d) => {
                    worksheet.write_datetime_with_format(r, c, d, &date_format)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
