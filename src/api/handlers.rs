//! API request handlers
//!
//! Handlers for all REST API endpoints.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::excel::{generate_sample, parse_workbook, SAMPLE_FILE_NAME};
use crate::loader::load_from;
use crate::submit::submit as post_submission;
use crate::types::{VariableRow, WorkbookData};

use super::server::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            request_id: Uuid::new_v4().to_string(),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Varsheet API Server".to_string(),
        version: state.version.clone(),
        description: "HTTP API for variable-sheet workbook conversion".to_string(),
        endpoints: vec![
            EndpointInfo {
                path: "/health".to_string(),
                method: "GET".to_string(),
                description: "Health check endpoint".to_string(),
            },
            EndpointInfo {
                path: "/version".to_string(),
                method: "GET".to_string(),
                description: "Get server version".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/sample".to_string(),
                method: "GET".to_string(),
                description: "Download a freshly generated sample workbook".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/parse".to_string(),
                method: "POST".to_string(),
                description: "Parse xlsx bytes into variable rows".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/load".to_string(),
                method: "POST".to_string(),
                description: "Fetch a workbook from a URL and parse it".to_string(),
            },
            EndpointInfo {
                path: "/api/v1/submit".to_string(),
                method: "POST".to_string(),
                description: "Forward variable rows to a remote endpoint".to_string(),
            },
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec![
            "sample".to_string(),
            "parse".to_string(),
            "load".to_string(),
            "submit".to_string(),
        ],
    }))
}

/// GET /api/v1/sample - Generated sample workbook as xlsx bytes
pub async fn sample() -> Response {
    match generate_sample() {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", SAMPLE_FILE_NAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::err(e.to_string())),
        )
            .into_response(),
    }
}

/// Parse response
#[derive(Serialize, Default)]
pub struct ParseResponse {
    pub parsed: bool,
    pub total_variables: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workbook: Option<WorkbookData>,
    pub message: String,
}

/// POST /api/v1/parse - Parse xlsx request body into variable rows
pub async fn parse(body: Bytes) -> impl IntoResponse {
    match parse_workbook(&body) {
        Ok(workbook) => Json(ApiResponse::ok(ParseResponse {
            parsed: true,
            total_variables: workbook.total_variables(),
            workbook: Some(workbook),
            message: "Workbook parsed".to_string(),
        })),
        Err(e) => Json(ApiResponse::ok(ParseResponse {
            parsed: false,
            total_variables: 0,
            workbook: None,
            message: format!("Error: {}", e),
        })),
    }
}

/// Load request
#[derive(Deserialize)]
pub struct LoadRequest {
    pub url: String,
}

/// Load response
#[derive(Serialize, Default)]
pub struct LoadResponse {
    pub loaded: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workbook: Option<WorkbookData>,
    pub message: String,
}

/// POST /api/v1/load - Fetch a workbook from a URL and parse it
pub async fn load(Json(req): Json<LoadRequest>) -> impl IntoResponse {
    match load_from(&req.url).await {
        Ok(workbook) => Json(ApiResponse::ok(LoadResponse {
            loaded: true,
            url: req.url,
            workbook: Some(workbook),
            message: "Workbook loaded".to_string(),
        })),
        Err(e) => Json(ApiResponse::ok(LoadResponse {
            loaded: false,
            url: req.url,
            workbook: None,
            message: format!("Error: {}", e),
        })),
    }
}

/// Submit request
#[derive(Deserialize)]
pub struct SubmitRequest {
    pub endpoint: String,
    #[serde(default)]
    pub sheet1: Vec<VariableRow>,
    #[serde(default)]
    pub sheet2: Vec<VariableRow>,
}

/// Submit response
#[derive(Serialize, Default)]
pub struct SubmitResponse {
    pub submitted: bool,
    pub endpoint: String,
    pub status: u16,
    pub message: String,
}

/// POST /api/v1/submit - Forward both row collections to a remote endpoint
pub async fn submit(Json(req): Json<SubmitRequest>) -> impl IntoResponse {
    match post_submission(&req.endpoint, &req.sheet1, &req.sheet2).await {
        Ok(receipt) => Json(ApiResponse::ok(SubmitResponse {
            submitted: true,
            endpoint: req.endpoint,
            status: receipt.status,
            message: "Submission accepted".to_string(),
        })),
        Err(e) => Json(ApiResponse::ok(SubmitResponse {
            submitted: false,
            endpoint: req.endpoint,
            status: 0,
            message: format!("Error: {}", e),
        })),
    }
}
