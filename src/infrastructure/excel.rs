//! XLSX report rendering.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use serde_json::Value;

use crate::domain::error::ReportError;
use crate::domain::invoice::InvoiceRecord;

/// Upstream field names and their report column titles, in output order.
///
/// Downstream consumers key off these titles and the header styling; treat
/// both as a compatibility contract.
pub const REPORT_COLUMNS: [(&str, &str); 6] = [
    ("RecordID", "Invoice ID"),
    ("Invoice_BillToName", "Company Name"),
    ("Invoice_InvoiceFromDate", "Invoice From Date"),
    ("Invoice_InvoiceToDate", "Invoice To Date"),
    ("Invoice_TotalGrossAmount", "Gross Amount"),
    ("Invoice_Reference", "Reference"),
];

/// Renders aggregated invoice records into a single-sheet XLSX workbook.
///
/// The workbook is produced entirely in memory; nothing touches persistent
/// storage.
#[derive(Debug, Clone)]
pub struct ExcelReportWriter {
    sheet_name: String,
    header_fill: u32,
    column_width: f64,
}

impl Default for ExcelReportWriter {
    fn default() -> Self {
        Self {
            sheet_name: "Invoice Report".to_string(),
            header_fill: 0xD7E4BC,
            column_width: 15.0,
        }
    }
}

impl ExcelReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the records onto the report columns and serializes the
    /// workbook to bytes.
    ///
    /// A record missing a source field leaves that cell blank rather than
    /// failing the render.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptyResult`] for an empty record set and
    /// [`ReportError::Render`] when workbook serialization fails.
    pub fn render(&self, records: &[InvoiceRecord]) -> Result<Vec<u8>, ReportError> {
        if records.is_empty() {
            return Err(ReportError::EmptyResult);
        }

        self.build_workbook(records)
            .map_err(|e| ReportError::Render(e.to_string()))
    }

    fn build_workbook(&self, records: &[InvoiceRecord]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let header = self.header_format();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;

        for (col, (_, title)) in REPORT_COLUMNS.iter().enumerate() {
            let col = col as u16;
            worksheet.write_with_format(0, col, *title, &header)?;
            worksheet.set_column_width(col, self.column_width)?;
        }

        for (row, record) in records.iter().enumerate() {
            let row = row as u32 + 1;
            for (col, (field, _)) in REPORT_COLUMNS.iter().enumerate() {
                write_cell(worksheet, row, col as u16, record.field(field))?;
            }
        }

        workbook.save_to_buffer()
    }

    fn header_format(&self) -> Format {
        Format::new()
            .set_bold()
            .set_text_wrap()
            .set_align(FormatAlign::Top)
            .set_background_color(self.header_fill)
            .set_border(FormatBorder::Thin)
    }
}

/// Missing fields and non-scalar values leave the cell blank.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&Value>,
) -> Result<(), XlsxError> {
    match value {
        Some(Value::String(s)) => {
            worksheet.write_string(row, col, s.as_str())?;
        }
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_f64() {
                worksheet.write_number(row, col, v)?;
            }
        }
        Some(Value::Bool(b)) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Reader, Xlsx};
    use serde_json::json;
    use std::io::Cursor;

    fn record(value: serde_json::Value) -> InvoiceRecord {
        serde_json::from_value(value).unwrap()
    }

    fn read_back(bytes: Vec<u8>) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range("Invoice Report").unwrap();
        range
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_render_rejects_empty_input() {
        let writer = ExcelReportWriter::new();
        assert_eq!(writer.render(&[]), Err(ReportError::EmptyResult));
    }

    #[test]
    fn test_header_row_has_mapped_titles_in_order() {
        let writer = ExcelReportWriter::new();
        let bytes = writer
            .render(&[record(json!({ "RecordID": 1 }))])
            .unwrap();

        let rows = read_back(bytes);
        assert_eq!(
            rows[0],
            vec![
                "Invoice ID",
                "Company Name",
                "Invoice From Date",
                "Invoice To Date",
                "Gross Amount",
                "Reference",
            ]
        );
    }

    #[test]
    fn test_rows_project_known_fields() {
        let writer = ExcelReportWriter::new();
        let bytes = writer
            .render(&[record(json!({
                "RecordID": 42,
                "Invoice_BillToName": "Acme",
                "Invoice_InvoiceFromDate": "2023-01-01T00:00:00",
                "Invoice_InvoiceToDate": "2023-01-31T00:00:00",
                "Invoice_TotalGrossAmount": 1234.5,
                "Invoice_Reference": "INV-42",
                "UnprojectedVendorField": "ignored",
            }))])
            .unwrap();

        let rows = read_back(bytes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "42");
        assert_eq!(rows[1][1], "Acme");
        assert_eq!(rows[1][4], "1234.5");
        assert_eq!(rows[1][5], "INV-42");
    }

    #[test]
    fn test_missing_fields_leave_cells_blank() {
        let writer = ExcelReportWriter::new();
        let bytes = writer
            .render(&[
                record(json!({ "RecordID": 1, "Invoice_Reference": "INV-1" })),
                record(json!({ "Invoice_BillToName": "Acme" })),
            ])
            .unwrap();

        let rows = read_back(bytes);
        assert_eq!(rows[1][0], "1");
        assert_eq!(rows[1][5], "INV-1");
        assert_eq!(rows[2][1], "Acme");
        assert_eq!(rows[2][0], "");
    }

    #[test]
    fn test_output_is_a_zip_container() {
        let writer = ExcelReportWriter::new();
        let bytes = writer.render(&[record(json!({ "RecordID": 1 }))]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
