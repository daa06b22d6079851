//! HTTP submission of the edited row collections.
//!
//! Both sheets are POSTed as one JSON body with a submission timestamp. Any
//! non-2xx response is [`VarsheetError::SubmitFailed`]; there is a single
//! attempt per call.

use crate::error::{VarsheetError, VarsheetResult};
use crate::types::VariableRow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// JSON body sent to the configured endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitPayload {
    pub sheet1: Vec<VariableRow>,
    pub sheet2: Vec<VariableRow>,
    pub timestamp: DateTime<Utc>,
}

impl SubmitPayload {
    pub fn new(sheet1: Vec<VariableRow>, sheet2: Vec<VariableRow>) -> Self {
        Self {
            sheet1,
            sheet2,
            timestamp: Utc::now(),
        }
    }
}

/// What the endpoint answered on success.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    pub status: u16,
    pub body: String,
}

/// POST both row collections to `endpoint`.
pub async fn submit(
    endpoint: &str,
    sheet1: &[VariableRow],
    sheet2: &[VariableRow],
) -> VarsheetResult<SubmitReceipt> {
    let payload = SubmitPayload::new(sheet1.to_vec(), sheet2.to_vec());
    debug!(
        "Submitting {} variables to {}",
        payload.sheet1.len() + payload.sheet2.len(),
        endpoint
    );

    let response = reqwest::Client::new()
        .post(endpoint)
        .json(&payload)
        .send()
        .await
        .map_err(|e| VarsheetError::SubmitFailed(format!("POST to {} failed: {}", endpoint, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(VarsheetError::SubmitFailed(format!(
            "{} returned HTTP {}",
            endpoint, status
        )));
    }

    let body = response.text().await.map_err(|e| {
        VarsheetError::SubmitFailed(format!("Failed to read response from {}: {}", endpoint, e))
    })?;

    Ok(SubmitReceipt {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VariableRow;

    #[test]
    fn test_payload_shape() {
        let payload = SubmitPayload::new(
            vec![VariableRow::new("Configuracion-0", "a", 1.0)],
            Vec::new(),
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("sheet1").is_some());
        assert!(json.get("sheet2").is_some());
        assert!(json.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_submit_failed() {
        let result = submit("http://127.0.0.1:1/post", &[], &[]).await;
        assert!(matches!(result, Err(VarsheetError::SubmitFailed(_))));
    }
}
