//! Transient session snapshots.
//!
//! The edited row collections are persisted as a flat JSON blob under a
//! string key and restored verbatim. The store is in-memory and lives only
//! as long as its owner; there is no schema versioning.

use crate::error::VarsheetResult;
use crate::types::VariableRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key the snapshot is stored under.
pub const SESSION_KEY: &str = "excelData";

/// Snapshot of both row collections plus the moment they were saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub sheet1: Vec<VariableRow>,
    pub sheet2: Vec<VariableRow>,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

impl SessionSnapshot {
    /// Snapshot the given collections at the current instant.
    pub fn now(sheet1: Vec<VariableRow>, sheet2: Vec<VariableRow>) -> Self {
        Self {
            sheet1,
            sheet2,
            saved_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> VarsheetResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> VarsheetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// In-memory string-keyed store for session snapshots.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize and store the snapshot under [`SESSION_KEY`].
    pub fn save(&mut self, snapshot: &SessionSnapshot) -> VarsheetResult<()> {
        let json = snapshot.to_json()?;
        self.entries.insert(SESSION_KEY.to_string(), json);
        Ok(())
    }

    /// Restore the stored snapshot, if any. A stored blob that fails to
    /// deserialize surfaces as a JSON error rather than being silently
    /// discarded.
    pub fn restore(&self) -> VarsheetResult<Option<SessionSnapshot>> {
        match self.entries.get(SESSION_KEY) {
            Some(json) => Ok(Some(SessionSnapshot::from_json(json)?)),
            None => Ok(None),
        }
    }

    pub fn clear(&mut self) {
        self.entries.remove(SESSION_KEY);
    }
}
