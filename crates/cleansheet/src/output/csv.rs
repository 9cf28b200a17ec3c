//! Delimited-text serialization.

use crate::error::Result;
use crate::table::Dataset;

/// Serialize a dataset as comma-separated text, header row first.
///
/// Cells are rendered as text; domain metadata is not carried by the
/// format. Empty and not-a-date cells become empty fields.
pub fn write_csv(data: &Dataset) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(data.column_names())?;
        for row in &data.rows {
            writer.write_record(row.iter().map(|cell| cell.to_display_string()))?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Parser;
    use crate::table::{CellValue, Column};
    use chrono::NaiveDate;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_header_and_rows() {
        let ds = Dataset::new(
            vec![Column::new("id"), Column::new("name")],
            vec![vec![text("1"), text("Alice")]],
        );
        let bytes = write_csv(&ds).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "id,name\n1,Alice\n");
    }

    #[test]
    fn test_typed_cells_rendered_as_text() {
        let ds = Dataset::new(
            vec![Column::new("n"), Column::new("d"), Column::new("e")],
            vec![vec![
                CellValue::Number(3.0),
                CellValue::Date(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()),
                CellValue::NotADate,
            ]],
        );
        let bytes = write_csv(&ds).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "n,d,e\n3,2023-05-01,\n");
    }

    #[test]
    fn test_quoting_round_trip() {
        let ds = Dataset::new(
            vec![Column::new("a")],
            vec![vec![text("has,comma")], vec![text("has \"quote\"")]],
        );
        let bytes = write_csv(&ds).unwrap();

        let reparsed = Parser::new().parse_bytes(&bytes, b',').unwrap();
        assert_eq!(reparsed.get(0, 0), Some(&text("has,comma")));
        assert_eq!(reparsed.get(1, 0), Some(&text("has \"quote\"")));
    }

    #[test]
    fn test_round_trip_preserves_textual_content() {
        let ds = Dataset::new(
            vec![Column::new("x"), Column::new("y")],
            vec![
                vec![text("1"), text("alpha")],
                vec![text(""), text("beta")],
            ],
        );
        let bytes = write_csv(&ds).unwrap();
        let reparsed = Parser::new().parse_bytes(&bytes, b',').unwrap();

        assert_eq!(reparsed.column_names(), ds.column_names());
        for (r, row) in ds.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                assert_eq!(
                    reparsed.get(r, c).unwrap().to_display_string(),
                    cell.to_display_string()
                );
            }
        }
    }
}
