//! Record Verification Agent
//!
//! Validates candidate/session records: a human corrects or fills in field
//! values, each value is checked against its declared type, and the agent
//! emits a corrected record plus a verification verdict.
//!
//! ## Architecture
//!
//! 1. **Validator** (`validator`): pure rule table mapping (raw string,
//!    declared type, required flag) to an accept/reject outcome with a fixed
//!    message.
//!
//! 2. **Processor** (`processor`): iterates a record's declared fields and
//!    ad-hoc question list, applies the validator to each submitted value,
//!    and builds a timestamped verdict document.
//!
//! 3. **Contracts** (`contracts/`): wire types for the input record and the
//!    verdict document.
//!
//! 4. **Handler** (`handler/`): axum routes for full-record verification,
//!    single-value live checks, health, and the field-type table.
//!
//! 5. **CLI** (`cli/`): command-line interface with machine-readable
//!    output, plus the `serve` entry point.
//!
//! ## Example
//!
//! ```rust
//! use record_verification::{contracts::RecordDocument, processor};
//! use std::collections::HashMap;
//!
//! let record: RecordDocument = serde_json::from_str(
//!     r#"{"sessionId": "s-1", "fields": {"name": "", "email": ""}}"#,
//! ).unwrap();
//!
//! let mut answers = HashMap::new();
//! answers.insert("name".to_string(), "Ada".to_string());
//! answers.insert("email".to_string(), "ada@example.com".to_string());
//!
//! let (verdict, verified) = processor::process(&record, &answers);
//! assert!(verified);
//! assert_eq!(verdict.corrected_data["name"], serde_json::json!("Ada"));
//! ```

pub mod cli;
pub mod error;
pub mod handler;
pub mod processor;
pub mod validator;

// Contracts module - located at ../contracts relative to src/
#[path = "../contracts/mod.rs"]
pub mod contracts;

// Re-export core types
pub use contracts::{AdditionalQuestion, RecordDocument, VerdictDocument};
pub use error::{Result, VerificationError};
pub use processor::process;
pub use validator::{
    declared_field_type, rejection_message, validate, FieldType, ValidationOutcome,
    DEFAULT_FIELD_TYPES, REQUIRED_MESSAGE,
};

// Re-export handler types for server deployment
pub use handler::{
    create_router, ApiError, ApiResponse, ErrorInfo, FieldTypeTable, HandlerState,
    HealthResponse, HealthStatus, SingleCheckRequest, SingleCheckResponse, VerifyRequest,
};

// Re-export CLI types for command-line usage
pub use cli::{ExitCode, OutputFormat, VerifyCli, VerifyCommands};

/// Agent version (from Cargo.toml)
pub const AGENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Agent identifier
pub const AGENT_ID: &str = "record-verification-agent";
