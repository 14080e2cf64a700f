//! Field maps for serializable values
//!
//! Turns any `Serialize` value into a map of its top-level field names to JSON
//! values, e.g. for analytics payloads or debug overlays.

use super::{PersistenceError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Map each top-level field of `value` to its JSON representation.
///
/// Structs and maps yield their entries; unit values and `None` yield an empty
/// map. Anything else (numbers, strings, sequences) is not a record.
pub fn to_field_map<T: Serialize + ?Sized>(value: &T) -> Result<BTreeMap<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields.into_iter().collect()),
        Value::Null => Ok(BTreeMap::new()),
        other => Err(PersistenceError::NotARecord(other.to_string())),
    }
}
