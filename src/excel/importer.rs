//! Workbook parsing - xlsx bytes → ordered variable rows.
//!
//! The first two sheets of the container become `sheet1` and `sheet2`; a
//! missing second sheet is an empty row collection, not an error. Each sheet
//! is read under a `Variable,Valor` header with cell types preserved.

use crate::error::{VarsheetError, VarsheetResult};
use crate::types::{CellValue, VariableRow, WorkbookData};
use calamine::{Data, Reader, Xlsx};
use std::io::{Cursor, Read, Seek};

/// Parse xlsx bytes into a fresh [`WorkbookData`].
///
/// Fails with [`VarsheetError::MalformedDocument`] when the bytes are not a
/// decodable xlsx container, or when a non-empty sheet carries neither of the
/// expected header columns.
pub fn parse_workbook(bytes: &[u8]) -> VarsheetResult<WorkbookData> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).map_err(|e| {
        VarsheetError::MalformedDocument(format!("Not a valid xlsx container: {}", e))
    })?;

    let sheet_names = workbook.sheet_names().to_vec();

    let sheet1 = match sheet_names.first() {
        Some(name) => parse_sheet(&mut workbook, name)?,
        None => Vec::new(),
    };
    let sheet2 = match sheet_names.get(1) {
        Some(name) => parse_sheet(&mut workbook, name)?,
        None => Vec::new(),
    };

    Ok(WorkbookData { sheet1, sheet2 })
}

/// Parse one sheet into rows, in top-to-bottom order.
///
/// Row ids are `"{sheetName}-{i}"` with i 0-based over data rows (header
/// excluded). Columns beyond "Variable"/"Valor" are ignored.
fn parse_sheet<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    sheet_name: &str,
) -> VarsheetResult<Vec<VariableRow>> {
    let range = match workbook.worksheet_range(sheet_name) {
        Ok(range) => range,
        Err(_) => return Ok(Vec::new()),
    };

    if range.is_empty() {
        return Ok(Vec::new());
    }

    let (height, width) = range.get_size();

    // Locate the header columns. The match is exact and case-sensitive;
    // renamed or localized headers are rejected.
    let mut variable_col = None;
    let mut valor_col = None;
    for col in 0..width {
        if let Some(Data::String(s)) = range.get((0, col)) {
            match s.as_str() {
                "Variable" => variable_col = Some(col),
                "Valor" => valor_col = Some(col),
                _ => {}
            }
        }
    }

    if variable_col.is_none() && valor_col.is_none() {
        return Err(VarsheetError::MalformedDocument(format!(
            "Sheet '{}' is missing the 'Variable'/'Valor' header columns",
            sheet_name
        )));
    }

    let mut rows = Vec::with_capacity(height.saturating_sub(1));
    for row in 1..height {
        let variable = variable_col
            .and_then(|col| range.get((row, col)))
            .map(cell_text)
            .unwrap_or_default();
        let valor = valor_col
            .and_then(|col| range.get((row, col)))
            .map(cell_value)
            .unwrap_or_else(CellValue::empty);

        rows.push(VariableRow::new(
            format!("{}-{}", sheet_name, row - 1),
            variable,
            valor,
        ));
    }

    Ok(rows)
}

/// Variable-name cell as a string; empty cell → empty string.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Value cell with its source type preserved.
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Empty => CellValue::empty(),
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn build_workbook(sheets: &[(&str, Vec<Vec<Data>>)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        for (name, rows) in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(*name).unwrap();
            for (r, row) in rows.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    match cell {
                        Data::String(s) => {
                            worksheet.write_string(r as u32, c as u16, s.as_str()).unwrap();
                        }
                        Data::Float(f) => {
                            worksheet.write_number(r as u32, c as u16, *f).unwrap();
                        }
                        _ => {}
                    }
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    fn header() -> Vec<Data> {
        vec![
            Data::String("Variable".to_string()),
            Data::String("Valor".to_string()),
        ]
    }

    #[test]
    fn test_parse_two_sheets_in_order() {
        let bytes = build_workbook(&[
            (
                "Configuracion",
                vec![
                    header(),
                    vec![Data::String("a".to_string()), Data::Float(1.0)],
                    vec![Data::String("b".to_string()), Data::Float(2.0)],
                ],
            ),
            (
                "Sistema",
                vec![
                    header(),
                    vec![Data::String("c".to_string()), Data::Float(3.0)],
                ],
            ),
        ]);

        let data = parse_workbook(&bytes).unwrap();
        assert_eq!(data.sheet1.len(), 2);
        assert_eq!(data.sheet2.len(), 1);
        assert_eq!(data.sheet1[0].id, "Configuracion-0");
        assert_eq!(data.sheet1[1].id, "Configuracion-1");
        assert_eq!(data.sheet2[0].id, "Sistema-0");
        assert_eq!(data.sheet1[0].variable, "a");
        assert_eq!(data.sheet1[0].valor, CellValue::Number(1.0));
    }

    #[test]
    fn test_header_only_sheet_is_empty_not_error() {
        let bytes = build_workbook(&[("Configuracion", vec![header()])]);
        let data = parse_workbook(&bytes).unwrap();
        assert!(data.sheet1.is_empty());
        assert!(data.sheet2.is_empty());
    }

    #[test]
    fn test_single_sheet_yields_empty_sheet2() {
        let bytes = build_workbook(&[(
            "Configuracion",
            vec![
                header(),
                vec![Data::String("x".to_string()), Data::Float(7.0)],
            ],
        )]);
        let data = parse_workbook(&bytes).unwrap();
        assert_eq!(data.sheet1.len(), 1);
        assert!(data.sheet2.is_empty());
    }

    #[test]
    fn test_text_values_stay_text() {
        let bytes = build_workbook(&[(
            "Configuracion",
            vec![
                header(),
                vec![
                    Data::String("modo".to_string()),
                    Data::String("manual".to_string()),
                ],
            ],
        )]);
        let data = parse_workbook(&bytes).unwrap();
        assert_eq!(data.sheet1[0].valor, CellValue::Text("manual".to_string()));
    }

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let result = parse_workbook(b"definitely not a zip archive");
        assert!(matches!(
            result,
            Err(VarsheetError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_misnamed_headers_are_malformed() {
        let bytes = build_workbook(&[(
            "Configuracion",
            vec![
                vec![
                    Data::String("Nombre".to_string()),
                    Data::String("Dato".to_string()),
                ],
                vec![Data::String("x".to_string()), Data::Float(1.0)],
            ],
        )]);
        let result = parse_workbook(&bytes);
        assert!(matches!(
            result,
            Err(VarsheetError::MalformedDocument(_))
        ));
    }
}
