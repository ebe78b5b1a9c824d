use serde_json::Value;

use crate::error::{Error, Result};

/// Extract the list of candidate records from the model's raw text.
///
/// A top-level array is returned untouched. A top-level object is searched
/// in document order and its first array-valued field wins, which covers
/// models that answer `{"questions": [...]}` instead of a bare array.
pub fn normalize_response(raw: &str) -> Result<Vec<Value>> {
    if raw.is_empty() {
        return Err(Error::EmptyResponse);
    }

    let parsed: Value = serde_json::from_str(raw).map_err(|source| Error::MalformedJson {
        source,
        raw: raw.to_string(),
    })?;

    match parsed {
        Value::Array(records) => Ok(records),
        Value::Object(fields) => {
            let (key, records) = fields
                .into_iter()
                .find_map(|(key, value)| match value {
                    Value::Array(records) => Some((key, records)),
                    _ => None,
                })
                .ok_or(Error::UnexpectedShape {
                    found: "object without a list field",
                })?;
            tracing::debug!(%key, "unwrapped list from response object");
            Ok(records)
        }
        other => Err(Error::UnexpectedShape {
            found: kind_of(&other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
