use anyhow::{Context, Result, anyhow};
use serde_json::Value;

const RECORD_LIST_KEYS: &[&str] = &["employees", "members", "data"];

/// Parses a record-set document. Exports come in more than one shape: a
/// bare array of records, or an object wrapping the array under a
/// well-known key. Individual records stay untyped bags; only a document
/// with no record list at all is an error.
pub fn parse_records_json(raw: &str) -> Result<Vec<Value>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON in records input")?;

    match parsed {
        Value::Array(records) => Ok(records),
        Value::Object(object) => {
            for key in RECORD_LIST_KEYS {
                if let Some(Value::Array(records)) = object.get(*key) {
                    return Ok(records.clone());
                }
            }
            Err(anyhow!(
                "no record list found; expected a top-level array or one of {RECORD_LIST_KEYS:?}"
            ))
        }
        _ => Err(anyhow!(
            "unexpected JSON type for records input; expected array or object"
        )),
    }
}
