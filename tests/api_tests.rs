//! API integration tests

use varsheet::api::handlers::{
    ApiResponse, EndpointInfo, HealthResponse, LoadRequest, LoadResponse, ParseResponse,
    RootResponse, SubmitRequest, SubmitResponse, VersionResponse,
};
use varsheet::api::server::{ApiConfig, AppState};
use varsheet::VariableRow;

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_config_default() {
    let config = ApiConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
}

#[test]
fn test_config_custom() {
    let config = ApiConfig {
        host: "0.0.0.0".to_string(),
        port: 3000,
    };
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
}

#[test]
fn test_config_clone() {
    let config = ApiConfig::default();
    let cloned = config.clone();
    assert_eq!(config.host, cloned.host);
    assert_eq!(config.port, cloned.port);
}

// ═══════════════════════════════════════════════════════════════════════════
// APP STATE TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_app_state_version() {
    let state = AppState {
        version: "1.0.0".to_string(),
    };
    assert_eq!(state.version, "1.0.0");
}

#[test]
fn test_app_state_in_arc() {
    use std::sync::Arc;
    let state = Arc::new(AppState {
        version: "1.0.0".to_string(),
    });
    let state_clone = Arc::clone(&state);
    assert_eq!(state.version, state_clone.version);
}

// ═══════════════════════════════════════════════════════════════════════════
// API RESPONSE TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_api_response_ok() {
    let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
    assert!(response.success);
    assert_eq!(response.data, Some("test".to_string()));
    assert!(response.error.is_none());
    // UUID format: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
    assert_eq!(response.request_id.len(), 36);
}

#[test]
fn test_api_response_err() {
    let response: ApiResponse<String> = ApiResponse::err("error message");
    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error, Some("error message".to_string()));
}

#[test]
fn test_api_response_unique_ids() {
    let r1: ApiResponse<i32> = ApiResponse::ok(1);
    let r2: ApiResponse<i32> = ApiResponse::ok(2);
    assert_ne!(r1.request_id, r2.request_id);
}

#[test]
fn test_api_response_err_omits_data_in_json() {
    let response: ApiResponse<i32> = ApiResponse::err("boom");
    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("data").is_none());
    assert_eq!(json["error"], "boom");
}

// ═══════════════════════════════════════════════════════════════════════════
// REQUEST / RESPONSE STRUCT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_health_response_fields() {
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    assert_eq!(response.status, "healthy");
}

#[test]
fn test_version_response_fields() {
    let response = VersionResponse {
        version: "1.0.0".to_string(),
        features: vec!["sample".to_string(), "parse".to_string()],
    };
    assert_eq!(response.version, "1.0.0");
    assert_eq!(response.features.len(), 2);
}

#[test]
fn test_root_response_serializes() {
    let response = RootResponse {
        name: "Varsheet API Server".to_string(),
        version: "1.0.0".to_string(),
        description: "test".to_string(),
        endpoints: vec![EndpointInfo {
            path: "/health".to_string(),
            method: "GET".to_string(),
            description: "Health check".to_string(),
        }],
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["endpoints"][0]["path"], "/health");
}

#[test]
fn test_load_request_deserializes() {
    let req: LoadRequest =
        serde_json::from_str(r#"{"url": "http://localhost:3000/datos.xlsx"}"#).unwrap();
    assert_eq!(req.url, "http://localhost:3000/datos.xlsx");
}

#[test]
fn test_submit_request_sheets_default_empty() {
    let req: SubmitRequest =
        serde_json::from_str(r#"{"endpoint": "https://httpbin.org/post"}"#).unwrap();
    assert_eq!(req.endpoint, "https://httpbin.org/post");
    assert!(req.sheet1.is_empty());
    assert!(req.sheet2.is_empty());
}

#[test]
fn test_submit_request_with_rows() {
    let req: SubmitRequest = serde_json::from_str(
        r#"{
            "endpoint": "https://httpbin.org/post",
            "sheet1": [{"id": "Configuracion-0", "variable": "a", "valor": 1.5}],
            "sheet2": []
        }"#,
    )
    .unwrap();
    assert_eq!(req.sheet1, vec![VariableRow::new("Configuracion-0", "a", 1.5)]);
}

#[test]
fn test_parse_response_default() {
    let response = ParseResponse::default();
    assert!(!response.parsed);
    assert_eq!(response.total_variables, 0);
    assert!(response.workbook.is_none());
}

#[test]
fn test_load_response_default() {
    let response = LoadResponse::default();
    assert!(!response.loaded);
    assert!(response.workbook.is_none());
}

#[test]
fn test_submit_response_default() {
    let response = SubmitResponse::default();
    assert!(!response.submitted);
    assert_eq!(response.status, 0);
}
