//! Output formatting for the Record Verification Agent CLI
//!
//! Renders a verdict document as JSON, YAML, or a colored human-readable
//! table.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::contracts::VerdictDocument;
use crate::error::VerificationError;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Verdict output structure for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictOutput {
    /// The verdict document itself
    #[serde(flatten)]
    pub verdict: VerdictDocument,
    /// Summary message
    pub summary: String,
}

impl VerdictOutput {
    /// Create output from a verdict document
    pub fn from_verdict(verdict: &VerdictDocument) -> Self {
        let summary = if verdict.verified {
            format!(
                "Record verified, {} value(s) corrected",
                verdict.corrected_data.len()
            )
        } else {
            format!("Record not verified, {} error(s)", verdict.errors.len())
        };

        Self {
            verdict: verdict.clone(),
            summary,
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<(), VerificationError> {
        match format {
            OutputFormat::Json => self.render_json(),
            OutputFormat::Yaml => self.render_yaml(),
            OutputFormat::Table => self.render_table(),
        }
    }

    /// Render the verdict document as JSON
    fn render_json(&self) -> Result<(), VerificationError> {
        let json = serde_json::to_string_pretty(&self.verdict)
            .map_err(|e| VerificationError::SerializationError(e.to_string()))?;
        println!("{}", json);
        Ok(())
    }

    /// Render the verdict document as YAML
    fn render_yaml(&self) -> Result<(), VerificationError> {
        let yaml = serde_yaml::to_string(&self.verdict)
            .map_err(|e| VerificationError::SerializationError(e.to_string()))?;
        println!("{}", yaml);
        Ok(())
    }

    /// Render as human-readable table
    fn render_table(&self) -> Result<(), VerificationError> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Verification Results".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();

        let status = if self.verdict.verified {
            "+".green()
        } else {
            "x".red()
        };
        writeln!(stdout, "{} {}", status, self.summary).ok();
        writeln!(stdout, "  Session: {}", self.verdict.session_id).ok();
        writeln!(stdout, "  Time:    {}", self.verdict.timestamp.as_str().dimmed()).ok();
        writeln!(stdout).ok();

        if !self.verdict.corrected_data.is_empty() {
            writeln!(stdout, "{}", "Corrected values:".cyan().bold()).ok();
            for (id, value) in &self.verdict.corrected_data {
                writeln!(stdout, "  {} {} = {}", "-".blue(), id.bold(), value).ok();
            }
            writeln!(stdout).ok();
        }

        if !self.verdict.errors.is_empty() {
            writeln!(stdout, "{}", "Errors:".red().bold()).ok();
            for (id, message) in &self.verdict.errors {
                writeln!(stdout, "  {} {}: {}", "x".red(), id.bold(), message).ok();
            }
            writeln!(stdout).ok();
        }

        stdout.flush().ok();
        Ok(())
    }
}
