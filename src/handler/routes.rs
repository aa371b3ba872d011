//! Route definitions for the Record Verification Agent
//!
//! - POST /verify - full-record verification
//! - POST /validate - single-value live check (`{value, vtype, required}` →
//!   `{ok, msg}`)
//! - GET /health - health check endpoint
//! - GET /field-types - the static field-name→type table
//!
//! `/verify` always answers HTTP 200 for a well-formed body: a failed
//! verification is data (`verified = false` with an error map), not an HTTP
//! error.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{
    ApiResponse, ComponentHealth, ErrorInfo, FieldTypeTable, HealthResponse, HealthStatus,
    SingleCheckRequest, SingleCheckResponse, VerifyRequest,
};
use crate::contracts::VerdictDocument;
use crate::validator::{self, DEFAULT_FIELD_TYPES};
use crate::processor;

/// Handler state shared across all routes
#[derive(Clone)]
pub struct HandlerState {
    /// Start time for uptime calculation
    pub start_time: Instant,
}

impl HandlerState {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for HandlerState {
    fn default() -> Self {
        Self::new()
    }
}

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalError(String),
}

impl ApiError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InternalError(msg) => msg,
        };
        let error_info = ErrorInfo::new(self.error_code(), message);
        let response = ApiResponse::<()>::error(error_info, uuid::Uuid::new_v4().to_string());

        (status, Json(response)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Create the router with all routes
pub fn create_router(state: HandlerState) -> Router {
    Router::new()
        .route("/verify", post(verify_record))
        .route("/validate", post(single_check))
        .route("/health", get(health_check))
        .route("/field-types", get(field_types))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// POST /verify - full-record verification
///
/// Runs the record processor over the supplied record and answer map and
/// returns the verdict document.
pub async fn verify_record(
    State(_state): State<HandlerState>,
    request: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<VerdictDocument>>, ApiError> {
    let Json(request) = request?;
    let request_id = uuid::Uuid::new_v4().to_string();

    let (verdict, verified) = processor::process(&request.record, &request.answers);

    tracing::info!(
        request_id = %request_id,
        verified,
        fields = request.record.fields.len(),
        questions = request.record.additional_questions.len(),
        errors = verdict.errors.len(),
        "record verification complete"
    );

    Ok(Json(ApiResponse::success(verdict, request_id)))
}

/// POST /validate - single-value live check
///
/// Validates one value against a declared type, independent of any record.
/// The response shape `{ok, msg}` is a compatibility contract.
pub async fn single_check(
    request: Result<Json<SingleCheckRequest>, JsonRejection>,
) -> Result<Json<SingleCheckResponse>, ApiError> {
    let Json(request) = request?;

    let outcome = validator::validate(Some(&request.value), &request.vtype, request.required);

    Ok(Json(SingleCheckResponse {
        ok: outcome.accepted,
        msg: outcome.message,
    }))
}

/// GET /health - health check endpoint
pub async fn health_check(State(state): State<HandlerState>) -> Json<HealthResponse> {
    let uptime_seconds = state.start_time.elapsed().as_secs();

    // Stateless engine, static table: both always available.
    let validation_engine = true;
    let field_table = !DEFAULT_FIELD_TYPES.is_empty();

    let status = if validation_engine && field_table {
        HealthStatus::Healthy
    } else if validation_engine {
        HealthStatus::Degraded
    } else {
        HealthStatus::Unhealthy
    };

    tracing::debug!(uptime_seconds, "health check");

    Json(HealthResponse {
        status,
        components: ComponentHealth {
            validation_engine,
            field_table,
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /field-types - the static field-name→type table
pub async fn field_types(
    State(_state): State<HandlerState>,
) -> Json<ApiResponse<FieldTypeTable>> {
    let request_id = uuid::Uuid::new_v4().to_string();

    let defaults: HashMap<String, String> = DEFAULT_FIELD_TYPES
        .iter()
        .map(|(name, field_type)| (name.to_string(), field_type.as_str().to_string()))
        .collect();

    let table = FieldTypeTable {
        defaults,
        fallback: "text".to_string(),
    };

    Json(ApiResponse::success(table, request_id))
}
