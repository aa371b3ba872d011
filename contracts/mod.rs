//! Contract types for the Record Verification Agent
//!
//! Defines the input record document consumed by the processor and the
//! verdict document it emits. Both shapes are wire contracts: field names
//! are camelCase and must stay stable for compatibility with existing
//! callers and stored verdicts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input record describing one candidate/session.
///
/// Missing `fields` or `additionalQuestions` containers are tolerated and
/// default to empty; unknown keys are ignored. No shape of this document
/// causes a hard failure from the processor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordDocument {
    /// Session identifier, copied verbatim into the verdict. Any JSON
    /// shape is accepted; absent means `null`.
    #[serde(rename = "sessionId", default)]
    pub session_id: serde_json::Value,

    /// Declared fields. Only the keys are consulted; the values are the
    /// record's current (possibly wrong) data and are ignored here.
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,

    /// Ad-hoc per-session questions, each carrying its own type and
    /// required flag.
    #[serde(rename = "additionalQuestions", default)]
    pub additional_questions: Vec<AdditionalQuestion>,
}

/// One ad-hoc question attached to a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalQuestion {
    /// Question identifier; also the key in the submitted answer map.
    pub id: String,

    /// Declared value type. Unknown names pass validation unconditionally.
    #[serde(rename = "type", default = "default_question_type")]
    pub question_type: String,

    /// Whether an answer must be present.
    #[serde(default)]
    pub required: bool,
}

fn default_question_type() -> String {
    "text".to_string()
}

impl AdditionalQuestion {
    /// Create a question with the default type (`text`) and not required.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question_type: default_question_type(),
            required: false,
        }
    }

    /// Set the declared type.
    pub fn with_type(mut self, question_type: impl Into<String>) -> Self {
        self.question_type = question_type.into();
        self
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Output artifact summarizing one verification pass.
///
/// `corrected_data` is populated if and only if `verified` is true;
/// `errors` is empty if and only if `verified` is true. The document is
/// constructed fresh per verification call and is immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictDocument {
    /// Session identifier from the input record, unvalidated.
    #[serde(rename = "sessionId")]
    pub session_id: serde_json::Value,

    /// Whether every field and question produced an accepted value.
    pub verified: bool,

    /// Corrected values keyed by field or question id. Numbers are stored
    /// as JSON numbers, everything else as strings.
    #[serde(rename = "correctedData")]
    pub corrected_data: serde_json::Map<String, serde_json::Value>,

    /// UTC instant of the verification, ISO-8601.
    pub timestamp: String,

    /// Rejection messages keyed by field or question id.
    pub errors: BTreeMap<String, String>,
}
