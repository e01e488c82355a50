//! Vector and table helpers

use std::collections::BTreeMap;

use crate::error::{RtResult, RuntimeError};
use crate::value::Value;

/// Sort ascending by numeric view.
///
/// `total_cmp` keeps the order total even when an element's numeric view
/// is NaN, so mixed vectors sort without panicking.
pub fn sort(items: &mut [Value]) {
    items.sort_by(|a, b| a.as_number().total_cmp(&b.as_number()));
}

/// Append a value
pub fn push(items: &mut Vec<Value>, value: Value) {
    items.push(value);
}

/// Remove and return the last value. Fails fast on an empty vector.
pub fn pop(items: &mut Vec<Value>) -> RtResult<Value> {
    items.pop().ok_or_else(RuntimeError::empty_pop)
}

/// Number of elements
pub fn length(items: &[Value]) -> usize {
    items.len()
}

/// Keys of the table, in sorted order
pub fn keys(table: &BTreeMap<String, Value>) -> Vec<String> {
    table.keys().cloned().collect()
}

/// Values of the table, in key-sorted order
pub fn values(table: &BTreeMap<String, Value>) -> Vec<Value> {
    table.values().cloned().collect()
}

/// Number of entries
pub fn size(table: &BTreeMap<String, Value>) -> usize {
    table.len()
}

/// Check whether the table has an entry for the key
pub fn has_key(table: &BTreeMap<String, Value>, key: &str) -> bool {
    table.contains_key(key)
}
