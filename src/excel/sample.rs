//! Sample workbook generation.
//!
//! Produces the two-sheet demo workbook ("Configuracion" / "Sistema") with
//! randomized illustrative values, as xlsx bytes or saved to a file.

use crate::error::{VarsheetError, VarsheetResult};
use rand::Rng;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// Default file name for the downloaded sample.
pub const SAMPLE_FILE_NAME: &str = "datos_ejemplo.xlsx";

/// Sheet names, in workbook order.
pub const SHEET_CONFIGURACION: &str = "Configuracion";
pub const SHEET_SISTEMA: &str = "Sistema";

/// Generate the sample workbook as xlsx bytes.
///
/// Sheet "Configuracion" carries general configuration variables, sheet
/// "Sistema" carries system parameters. Every run produces fresh random
/// values inside the documented ranges; `velocidad_viento` is rounded to
/// two decimals and `debug_mode` is always 0 or 1.
pub fn generate_sample() -> VarsheetResult<Vec<u8>> {
    let mut rng = rand::thread_rng();
    let mut workbook = Workbook::new();

    let configuracion: Vec<(&str, f64)> = vec![
        ("temperatura_max", rng.gen_range(20..70) as f64),
        ("temperatura_min", rng.gen_range(0..20) as f64),
        ("humedad_objetivo", rng.gen_range(40..80) as f64),
        ("presion_atmosferica", rng.gen_range(1000..1100) as f64),
        (
            "velocidad_viento",
            // Truncate to 2 decimals; rounding could land on exactly 30.00
            // and leave the [0,30) range.
            (rng.gen_range(0.0_f64..30.0) * 100.0).floor() / 100.0,
        ),
    ];

    let sistema: Vec<(&str, f64)> = vec![
        ("timeout_conexion", rng.gen_range(10..70) as f64),
        ("max_reintentos", rng.gen_range(1..6) as f64),
        ("intervalo_muestreo", rng.gen_range(100..1100) as f64),
        ("buffer_size", rng.gen_range(256..1280) as f64),
        ("debug_mode", if rng.gen_bool(0.5) { 1.0 } else { 0.0 }),
    ];

    write_sheet(workbook.add_worksheet(), SHEET_CONFIGURACION, &configuracion)?;
    write_sheet(workbook.add_worksheet(), SHEET_SISTEMA, &sistema)?;

    workbook
        .save_to_buffer()
        .map_err(|e| VarsheetError::Workbook(format!("Failed to serialize workbook: {}", e)))
}

/// Generate the sample workbook and save it to `path`.
pub fn write_sample(path: &Path) -> VarsheetResult<()> {
    let bytes = generate_sample()?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Write one sheet: header row `Variable,Valor` followed by the data rows.
fn write_sheet(
    worksheet: &mut Worksheet,
    name: &str,
    rows: &[(&str, f64)],
) -> VarsheetResult<()> {
    worksheet
        .set_name(name)
        .map_err(|e| VarsheetError::Workbook(format!("Failed to set sheet name: {}", e)))?;

    worksheet
        .write_string(0, 0, "Variable")
        .and_then(|ws| ws.write_string(0, 1, "Valor"))
        .map_err(|e| VarsheetError::Workbook(format!("Failed to write header: {}", e)))?;

    for (idx, (variable, valor)) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet
            .write_string(row, 0, *variable)
            .and_then(|ws| ws.write_number(row, 1, *valor))
            .map_err(|e| VarsheetError::Workbook(format!("Failed to write row {}: {}", row, e)))?;
    }

    Ok(())
}
