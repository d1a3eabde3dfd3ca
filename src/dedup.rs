//! Order-preserving deduplication
//!
//! All three variants keep the first occurrence of each distinct key and
//! drop the rest, in a single pass over the input with a hash-based seen
//! set. Running any of them on their own output is a no-op.

use serde_json::Value;
use std::collections::HashSet;
use std::hash::Hash;

/// Remove duplicate elements, keeping the first occurrence of each value
///
/// # Examples
///
/// ```
/// use kitbag::dedup::unique;
///
/// assert_eq!(unique(vec![1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn unique<T>(items: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    unique_by(items, |item| item.clone())
}

/// Remove duplicates keyed by a caller-supplied derivation function
///
/// Two elements are duplicates when `key_fn` maps them to equal keys; the
/// first occurrence of each key survives.
pub fn unique_by<T, K, F>(items: Vec<T>, mut key_fn: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key_fn(item)))
        .collect()
}

/// Remove duplicate JSON records keyed by a named field
///
/// The key is the canonical JSON rendering of the field's value, so `1` and
/// `"1"` stay distinct. Records missing the field all share the `null` key;
/// only the first of them survives.
pub fn unique_by_field(items: Vec<Value>, field: &str) -> Vec<Value> {
    unique_by(items, |item| {
        item.get(field).cloned().unwrap_or(Value::Null).to_string()
    })
}
