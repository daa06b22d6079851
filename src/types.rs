use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

//==============================================================================
// Cell values
//==============================================================================

/// Payload of a variable row.
///
/// The cell type observed in the source workbook is preserved: numeric cells
/// stay numbers, textual cells stay strings. Serializes untagged, so JSON
/// round-trips as a plain number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Empty-cell placeholder used when "Valor" is absent or null.
    pub fn empty() -> Self {
        CellValue::Text(String::new())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// Display form: numbers without a trailing `.0` when integral.
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

//==============================================================================
// Rows and workbooks
//==============================================================================

/// One variable/value pair with a per-sheet-unique identifier.
///
/// Ids are assigned at creation time (`"{sheet}-{index}"` by the parser,
/// `"new-{millis}"` for manually appended rows) and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRow {
    pub id: String,
    pub variable: String,
    pub valor: CellValue,
}

impl VariableRow {
    pub fn new(
        id: impl Into<String>,
        variable: impl Into<String>,
        valor: impl Into<CellValue>,
    ) -> Self {
        Self {
            id: id.into(),
            variable: variable.into(),
            valor: valor.into(),
        }
    }
}

/// Parsed workbook: the first two sheets as ordered row collections.
///
/// Constructed fresh on every generate/parse call; editing operates on
/// caller-owned copies of the vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkbookData {
    pub sheet1: Vec<VariableRow>,
    pub sheet2: Vec<VariableRow>,
}

impl WorkbookData {
    pub fn total_variables(&self) -> usize {
        self.sheet1.len() + self.sheet2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheet1.is_empty() && self.sheet2.is_empty()
    }
}

//==============================================================================
// Row-collection editing
//==============================================================================

/// Last millisecond value handed out by [`append_row`]. Bumped past itself
/// when two appends land in the same millisecond, so ids stay unique.
static LAST_APPEND_MILLIS: AtomicI64 = AtomicI64::new(0);

fn next_append_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_APPEND_MILLIS
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(last.max(now - 1) + 1)
        })
        .unwrap_or(now - 1);
    prev.max(now - 1) + 1
}

/// Append a blank-or-filled row with a timestamp-derived id.
pub fn append_row(
    rows: &mut Vec<VariableRow>,
    variable: impl Into<String>,
    valor: impl Into<CellValue>,
) -> String {
    let id = format!("new-{}", next_append_millis());
    rows.push(VariableRow::new(id.clone(), variable, valor));
    id
}

/// Rename the variable of the row with the given id. Returns false if absent.
pub fn update_variable(rows: &mut [VariableRow], id: &str, variable: impl Into<String>) -> bool {
    match rows.iter_mut().find(|r| r.id == id) {
        Some(row) => {
            row.variable = variable.into();
            true
        }
        None => false,
    }
}

/// Replace the value of the row with the given id. Returns false if absent.
pub fn update_valor(rows: &mut [VariableRow], id: &str, valor: impl Into<CellValue>) -> bool {
    match rows.iter_mut().find(|r| r.id == id) {
        Some(row) => {
            row.valor = valor.into();
            true
        }
        None => false,
    }
}

/// Delete the row with the given id. Returns false if absent.
pub fn remove_row(rows: &mut Vec<VariableRow>, id: &str) -> bool {
    let before = rows.len();
    rows.retain(|r| r.id != id);
    rows.len() != before
}
