//! CLI module for the Record Verification Agent
//!
//! Command-line front end over the validation core: verify a record file
//! against an answers file, check a single value, or serve the HTTP API.

pub mod commands;
pub mod output;

pub use commands::{VerifyCli, VerifyCommands};
pub use output::{OutputFormat, VerdictOutput};

use crate::error::VerificationError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution, record verified
    Success = 0,
    /// Record not verified (per-field errors present)
    NotVerified = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a verification outcome
    pub fn from_verified(verified: bool) -> Self {
        if verified {
            ExitCode::Success
        } else {
            ExitCode::NotVerified
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub async fn run(cli: VerifyCli) -> Result<ExitCode, VerificationError> {
    match cli.command {
        VerifyCommands::Verify {
            record,
            answers,
            output,
            format,
        } => commands::execute_verify(record, answers, output, format),
        VerifyCommands::Check {
            value,
            vtype,
            required,
        } => commands::execute_check(value, vtype, required),
        VerifyCommands::Serve { port, host } => commands::execute_serve(port, host).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::NotVerified), 1);
        assert_eq!(i32::from(ExitCode::InvalidInput), 3);
        assert_eq!(i32::from(ExitCode::FileError), 4);
    }

    #[test]
    fn test_exit_code_from_verified() {
        assert_eq!(ExitCode::from_verified(true), ExitCode::Success);
        assert_eq!(ExitCode::from_verified(false), ExitCode::NotVerified);
    }
}
