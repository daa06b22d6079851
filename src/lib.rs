//! Varsheet - variable-sheet workbook toolkit
//!
//! This library converts between xlsx workbooks and in-memory collections of
//! `(variable, value)` rows: sample generation, parsing, remote loading,
//! session snapshots and HTTP submission for a two-table variable document.
//!
//! # Features
//!
//! - Randomized two-sheet sample workbook ("Configuracion" / "Sistema")
//! - xlsx bytes → ordered `VariableRow` collections with cell types preserved
//! - HTTP loading of remote workbooks
//! - Transient session snapshots (`{sheet1, sheet2, savedAt}` JSON blob)
//! - JSON submission of both sheets to a configured endpoint
//!
//! # Example
//!
//! ```no_run
//! use varsheet::excel::{generate_sample, parse_workbook};
//!
//! let bytes = generate_sample()?;
//! let workbook = parse_workbook(&bytes)?;
//!
//! assert_eq!(workbook.sheet1.len(), 5);
//! assert_eq!(workbook.sheet2.len(), 5);
//! # Ok::<(), varsheet::error::VarsheetError>(())
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod excel;
pub mod loader;
pub mod session;
pub mod submit;
pub mod types;

// Re-export commonly used types
pub use error::{VarsheetError, VarsheetResult};
pub use session::{SessionSnapshot, SessionStore};
pub use submit::{SubmitPayload, SubmitReceipt};
pub use types::{CellValue, VariableRow, WorkbookData};
