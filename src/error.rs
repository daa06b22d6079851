use thiserror::Error;

pub type VarsheetResult<T> = Result<T, VarsheetError>;

#[derive(Error, Debug)]
pub enum VarsheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Submission failed: {0}")]
    SubmitFailed(String),

    #[error("Workbook error: {0}")]
    Workbook(String),
}
