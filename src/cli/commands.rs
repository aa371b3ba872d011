//! CLI command definitions for the Record Verification Agent
//!
//! Clap-based commands for verifying record files, checking single values,
//! and serving the HTTP API.

use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;

use super::output::{OutputFormat, VerdictOutput};
use super::ExitCode;
use crate::contracts::RecordDocument;
use crate::error::VerificationError;
use crate::handler::{create_router, HandlerState};
use crate::{processor, validator};

/// Record Verification Agent CLI
///
/// Verify candidate/session records against their declared field types and
/// emit a corrected record plus a verification verdict.
#[derive(Parser, Debug)]
#[command(name = "record-verify")]
#[command(about = "Record Verification Agent - validate and correct session records", long_about = None)]
#[command(version)]
pub struct VerifyCli {
    #[command(subcommand)]
    pub command: VerifyCommands,
}

/// Available verification commands
#[derive(Subcommand, Debug)]
pub enum VerifyCommands {
    /// Verify a record against submitted answers
    ///
    /// Reads the record document and a flat JSON map of submitted values,
    /// runs the validator over every declared field and ad-hoc question,
    /// and prints the verdict document.
    Verify {
        /// Path to the record JSON file
        #[arg(short, long)]
        record: PathBuf,

        /// Path to the answers JSON file (flat map of id to value)
        ///
        /// If not provided, every value is treated as unsubmitted.
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Write the verdict document (pretty JSON) to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format for the verdict
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Check a single value against a declared type
    ///
    /// Prints `{"ok": bool, "msg": string}`, the same contract as the
    /// live-check HTTP endpoint.
    Check {
        /// Raw value to check
        #[arg(short, long)]
        value: String,

        /// Declared type name (text, email, number, yesno)
        #[arg(short = 't', long, default_value = "text")]
        vtype: String,

        /// Treat the value as required
        #[arg(long)]
        required: bool,
    },

    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "PORT")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },
}

/// Execute the verify command
pub fn execute_verify(
    record: PathBuf,
    answers: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<ExitCode, VerificationError> {
    let record = load_record(&record)?;
    let answers = match answers {
        Some(path) => load_answers(&path)?,
        None => HashMap::new(),
    };

    let (verdict, verified) = processor::process(&record, &answers);

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&verdict)
            .map_err(|e| VerificationError::SerializationError(e.to_string()))?;
        std::fs::write(&path, json).map_err(|e| {
            VerificationError::FileError(format!(
                "Failed to write verdict to '{}': {}",
                path.display(),
                e
            ))
        })?;
        tracing::info!(path = %path.display(), "verdict written");
    }

    let output_format = format.unwrap_or(OutputFormat::Table);
    VerdictOutput::from_verdict(&verdict).render(output_format)?;

    Ok(ExitCode::from_verified(verified))
}

/// Execute the check command
pub fn execute_check(
    value: String,
    vtype: String,
    required: bool,
) -> Result<ExitCode, VerificationError> {
    let outcome = validator::validate(Some(&value), &vtype, required);

    let json = serde_json::to_string(&serde_json::json!({
        "ok": outcome.accepted,
        "msg": outcome.message,
    }))
    .map_err(|e| VerificationError::SerializationError(e.to_string()))?;
    println!("{}", json);

    Ok(ExitCode::from_verified(outcome.accepted))
}

/// Execute the serve command
pub async fn execute_serve(port: u16, host: String) -> Result<ExitCode, VerificationError> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| VerificationError::InvalidInput(format!("Invalid bind address: {}", e)))?;

    let router = create_router(HandlerState::new());

    tracing::info!("Starting Record Verification Agent on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| VerificationError::InternalError(format!("Failed to bind: {}", e)))?;
    axum::serve(listener, router)
        .await
        .map_err(|e| VerificationError::InternalError(e.to_string()))?;

    Ok(ExitCode::Success)
}

/// Load and parse a record document
fn load_record(path: &PathBuf) -> Result<RecordDocument, VerificationError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        VerificationError::FileError(format!(
            "Failed to read record file '{}': {}",
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| VerificationError::ParseError(format!("Invalid record JSON: {}", e)))
}

/// Load and parse an answers map
fn load_answers(path: &PathBuf) -> Result<HashMap<String, String>, VerificationError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        VerificationError::FileError(format!(
            "Failed to read answers file '{}': {}",
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| VerificationError::ParseError(format!("Invalid answers JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_record_missing_file() {
        let result = load_record(&PathBuf::from("/no/such/record.json"));
        assert!(matches!(result, Err(VerificationError::FileError(_))));
    }

    #[test]
    fn test_load_record_invalid_json() {
        let file = write_temp("not json");
        let result = load_record(&file.path().to_path_buf());
        assert!(matches!(result, Err(VerificationError::ParseError(_))));
    }

    #[test]
    fn test_load_answers() {
        let file = write_temp(r#"{"name": "Al", "email": "x@y.com"}"#);
        let answers = load_answers(&file.path().to_path_buf()).unwrap();
        assert_eq!(answers.get("name"), Some(&"Al".to_string()));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_execute_check_exit_codes() {
        let code = execute_check("a@b.co".to_string(), "email".to_string(), true).unwrap();
        assert_eq!(code, ExitCode::Success);

        let code = execute_check("bad".to_string(), "email".to_string(), true).unwrap();
        assert_eq!(code, ExitCode::NotVerified);
    }
}
