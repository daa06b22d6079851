//! Workbook conversion module.
//!
//! Bidirectional xlsx ↔ row-collection conversion:
//! - Sample: randomized two-sheet demo workbook → xlsx bytes
//! - Import: xlsx bytes → ordered `VariableRow` collections

mod importer;
mod sample;

pub use importer::parse_workbook;
pub use sample::{
    generate_sample, write_sample, SAMPLE_FILE_NAME, SHEET_CONFIGURACION, SHEET_SISTEMA,
};
