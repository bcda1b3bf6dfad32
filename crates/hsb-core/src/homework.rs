//! Shape checks and message rendering for homework API payloads.

use serde::Deserialize;
use serde_json::Value;

use crate::{domain::HomeworkStatus, errors::SchemaViolation, Result};

/// Check the top-level response shape and return the `homeworks` sequence.
///
/// Individual records are not inspected here; see [`parse_status`].
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let Some(obj) = response.as_object() else {
        return Err(violation(SchemaViolation::NotAMapping));
    };
    let Some(homeworks) = obj.get("homeworks") else {
        return Err(violation(SchemaViolation::MissingHomeworks));
    };
    match homeworks.as_array() {
        Some(list) => Ok(list.as_slice()),
        None => Err(violation(SchemaViolation::NotASequence)),
    }
}

/// Render the notification text for one homework record.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(SchemaViolation::MissingName)?;

    let status = homework
        .get("status")
        .and_then(|s| HomeworkStatus::deserialize(s).ok())
        .ok_or(SchemaViolation::UnknownStatus)?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

fn violation(v: SchemaViolation) -> crate::Error {
    tracing::error!("{v}");
    v.into()
}
