//! Handler module for the Record Verification Agent
//!
//! HTTP surface over the validation core:
//! - `routes`: route definitions and the shared handler state
//!
//! The handlers are stateless and deterministic apart from the verdict
//! timestamp; all responses are machine-readable JSON. The single-value
//! `/validate` endpoint returns a bare `{ok, msg}` object; that shape is a
//! compatibility contract with live form checkers and must not grow the
//! envelope.

pub mod routes;

pub use routes::{
    create_router, field_types, health_check, single_check, verify_record, ApiError,
    HandlerState,
};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::contracts::RecordDocument;

/// Standard API response wrapper for verification results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error information (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    /// Request metadata for tracing
    pub metadata: ResponseMetadata,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, request_id: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            metadata: ResponseMetadata::new(request_id),
        }
    }

    /// Create an error response
    pub fn error(error: ErrorInfo, request_id: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(error),
            metadata: ResponseMetadata::new(request_id),
        }
    }
}

/// Error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Response metadata for tracing and debugging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Unique request identifier
    pub request_id: String,
    /// Timestamp of response generation (ISO 8601)
    pub timestamp: String,
    /// Agent version
    pub version: String,
}

impl ResponseMetadata {
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Full-record verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// The record document to verify
    pub record: RecordDocument,
    /// Submitted values keyed by field or question id
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

/// Single-value validation request, used for live per-field checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleCheckRequest {
    /// Raw submitted value
    #[serde(default)]
    pub value: String,
    /// Declared type name
    #[serde(default = "default_vtype")]
    pub vtype: String,
    /// Whether the field is required
    #[serde(default)]
    pub required: bool,
}

fn default_vtype() -> String {
    "text".to_string()
}

/// Single-value validation response. Bare shape, no envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleCheckResponse {
    /// Whether the value was accepted
    pub ok: bool,
    /// Rejection message, empty when accepted
    pub msg: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Component-level health
    pub components: ComponentHealth,
    /// Timestamp of health check
    pub timestamp: String,
    /// Agent version
    pub version: String,
}

/// Health status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Component-level health information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Validation engine status
    pub validation_engine: bool,
    /// Field-type table status
    pub field_table: bool,
}

/// The static field-name→type table, as served by `GET /field-types`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldTypeTable {
    /// Declared types keyed by field name
    pub defaults: HashMap<String, String>,
    /// Type used for field names not in the table
    pub fallback: String,
}
