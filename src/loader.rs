//! Document loader - fetch workbook bytes over HTTP and parse them.
//!
//! One GET per call, no retries, no caching. A non-success status is
//! [`VarsheetError::FetchFailed`]; undecodable bytes propagate as
//! [`VarsheetError::MalformedDocument`] from the parser.

use crate::error::{VarsheetError, VarsheetResult};
use crate::excel::parse_workbook;
use crate::types::WorkbookData;
use tracing::debug;

/// Fetch an xlsx document from `url` and parse it.
pub async fn load_from(url: &str) -> VarsheetResult<WorkbookData> {
    debug!("Fetching workbook from {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| VarsheetError::FetchFailed(format!("Request to {} failed: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(VarsheetError::FetchFailed(format!(
            "{} returned HTTP {}",
            url, status
        )));
    }

    let bytes = response.bytes().await.map_err(|e| {
        VarsheetError::FetchFailed(format!("Failed to read body from {}: {}", url, e))
    })?;

    parse_workbook(&bytes)
}
