//! Record Verification Agent entry point
//!
//! # Usage
//!
//! ```bash
//! # Verify a record against submitted answers
//! record-verify verify --record session.json --answers answers.json
//!
//! # Check a single value
//! record-verify check --value a@b.co --vtype email --required
//!
//! # Serve the HTTP API
//! record-verify serve --port 8080
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success - record verified
//! - 1: Record not verified
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

use clap::Parser;
use record_verification::cli::{self, ExitCode, VerifyCli, VerifyCommands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = VerifyCli::parse();

    // JSON logs when serving, compact logs for one-shot commands.
    match &cli.command {
        VerifyCommands::Serve { .. } => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
                ))
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::WARN.into()),
                )
                .with_target(false)
                .init();
        }
    }

    let exit_code = match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                record_verification::VerificationError::FileError(_) => ExitCode::FileError,
                e if e.is_user_error() => ExitCode::InvalidInput,
                _ => ExitCode::InternalError,
            }
        }
    };
    std::process::exit(exit_code.into());
}
