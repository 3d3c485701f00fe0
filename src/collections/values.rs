use super::types::KeyValuePair;
use crate::error::{Result, ResultExt as _};
use serde::Serialize;
use serde_json::{Map, Value};

/// Number of keys in a JSON value.
///
/// Objects count their properties, arrays their indices and strings their
/// UTF-16 indices, so `"😀"` has two keys. Scalars have no keys.
pub fn number_of_keys(value: &Value) -> usize {
    let count = match value {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        Value::String(s) => s.encode_utf16().count(),
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
    };
    log::debug!("number_of_keys: {count}");
    count
}

/// Number of keys a typed record has once serialised.
///
/// # Errors
///
/// Returns an error if the record cannot be represented as JSON.
pub fn number_of_record_keys<T: Serialize>(record: &T) -> Result<usize> {
    let value = serde_json::to_value(record).context("Failed to serialise record")?;
    Ok(number_of_keys(&value))
}

/// Sum of the numeric entries, skipping falsy and non-numeric values.
pub fn sum_numbers(values: &[Value]) -> f64 {
    let total: f64 = values.iter().filter_map(Value::as_f64).sum();
    log::debug!("sum_numbers: {} values -> {total}", values.len());
    total
}

/// Builds a member object from `[key, value]` pairs.
///
/// A repeated key takes the later value but keeps its first position.
pub fn new_member_array_to_object(pairs: &[KeyValuePair]) -> Map<String, Value> {
    let mut member = Map::with_capacity(pairs.len());
    for KeyValuePair(key, value) in pairs {
        member.insert(key.clone(), value.clone());
    }
    log::debug!(
        "new_member_array_to_object: {} pairs -> {} keys",
        pairs.len(),
        member.len()
    );
    member
}

/// Splits an object back into `[key, value]` pairs in key order.
pub fn member_object_to_array(member: &Map<String, Value>) -> Vec<KeyValuePair> {
    member
        .iter()
        .map(|(key, value)| KeyValuePair(key.clone(), value.clone()))
        .collect()
}
