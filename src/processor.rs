//! Record processing
//!
//! Drives the validator over a record's declared fields and ad-hoc
//! questions, aggregates corrected values or error messages, and builds the
//! timestamped verdict document. Pure with respect to its inputs except for
//! one wall-clock read per call. Never fails: all problems surface as
//! per-field messages in the verdict.

use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

use crate::contracts::{RecordDocument, VerdictDocument};
use crate::validator::{self, FieldType};

/// Verify one record against a flat map of submitted field values.
///
/// Declared fields are always required; their types come from the static
/// name→type table. Questions carry their own type and required flag.
/// Returns the verdict document together with the verified flag.
pub fn process(
    record: &RecordDocument,
    submitted: &HashMap<String, String>,
) -> (VerdictDocument, bool) {
    let mut corrected = Map::new();
    let mut errors = BTreeMap::new();

    // Declared fields: keys only, values in the record are ignored.
    for field in record.fields.keys() {
        let field_type = validator::declared_field_type(field);
        let outcome = validator::validate(
            submitted.get(field).map(String::as_str),
            field_type.as_str(),
            true,
        );
        if outcome.accepted {
            corrected.insert(field.clone(), corrected_value(outcome.value, field_type));
        } else {
            errors.insert(field.clone(), outcome.message);
        }
    }

    for question in &record.additional_questions {
        let outcome = validator::validate(
            submitted.get(&question.id).map(String::as_str),
            &question.question_type,
            question.required,
        );
        if outcome.accepted {
            // Accepted-but-blank optional answers are dropped: neither a
            // corrected entry nor an error entry is recorded for them.
            if !outcome.value.is_empty() || question.required {
                let value = match FieldType::from_name(&question.question_type) {
                    Some(FieldType::Number) => {
                        corrected_value(outcome.value, FieldType::Number)
                    }
                    _ => Value::String(outcome.value),
                };
                corrected.insert(question.id.clone(), value);
            }
        } else {
            errors.insert(question.id.clone(), outcome.message);
        }
    }

    let verified = errors.is_empty();
    let verdict = VerdictDocument {
        session_id: record.session_id.clone(),
        verified,
        corrected_data: if verified { corrected } else { Map::new() },
        timestamp: Utc::now().to_rfc3339(),
        errors,
    };
    (verdict, verified)
}

/// Convert an accepted value for storage in the corrected map.
///
/// Accepted `number` values are stored as JSON numbers: integer when the
/// literal has no decimal point, floating-point otherwise. Everything else
/// stays a string.
fn corrected_value(value: String, field_type: FieldType) -> Value {
    if field_type != FieldType::Number || value.is_empty() {
        return Value::String(value);
    }
    numeric_value(value)
}

fn numeric_value(value: String) -> Value {
    if value.contains('.') {
        if let Some(number) = value
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
        {
            return Value::Number(number);
        }
    } else if let Ok(integer) = value.parse::<i64>() {
        return Value::Number(integer.into());
    } else if let Some(number) = value
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
    {
        // Integer literal wider than i64; keep it as a float.
        return Value::Number(number);
    }
    Value::String(value)
}
