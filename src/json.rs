//! Deep traversal helpers for JSON values
//!
//! Both helpers walk the whole value tree, descending through objects and
//! arrays. A `serde_json::Value` cannot contain cycles, so the recursion
//! always terminates.

use serde_json::Value;

/// Recursively remove every object entry whose key is in `keys`
///
/// Removal happens in place. Entries that survive are traversed in turn, as
/// are array elements, so a matching key is removed at any depth.
///
/// # Examples
///
/// ```
/// use kitbag::json::remove_keys;
/// use serde_json::json;
///
/// let mut value = json!({"id": 1, "nested": {"password": "x", "kept": true}});
/// remove_keys(&mut value, &["password"]);
/// assert_eq!(value, json!({"id": 1, "nested": {"kept": true}}));
/// ```
pub fn remove_keys(value: &mut Value, keys: &[&str]) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| !keys.contains(&key.as_str()));
            for child in map.values_mut() {
                remove_keys(child, keys);
            }
        }
        Value::Array(items) => {
            for item in items {
                remove_keys(item, keys);
            }
        }
        _ => {}
    }
}

/// Recursively check whether any object at any depth has an entry named `name`
pub fn has_deep_property(value: &Value, name: &str) -> bool {
    match value {
        Value::Object(map) => {
            map.contains_key(name) || map.values().any(|child| has_deep_property(child, name))
        }
        Value::Array(items) => items.iter().any(|item| has_deep_property(item, name)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remove_keys_top_level() {
        let mut value = json!({"keep": 1, "drop": 2});
        remove_keys(&mut value, &["drop"]);
        assert_eq!(value, json!({"keep": 1}));
    }

    #[test]
    fn test_remove_keys_nested_objects() {
        let mut value = json!({
            "user": {
                "name": "ada",
                "secret": "hunter2",
                "profile": {"secret": "again", "bio": "text"}
            }
        });

        remove_keys(&mut value, &["secret"]);
        assert_eq!(
            value,
            json!({"user": {"name": "ada", "profile": {"bio": "text"}}})
        );
    }

    #[test]
    fn test_remove_keys_inside_arrays() {
        let mut value = json!([{"token": "a", "id": 1}, {"token": "b", "id": 2}]);
        remove_keys(&mut value, &["token"]);
        assert_eq!(value, json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn test_remove_keys_multiple_keys() {
        let mut value = json!({"a": 1, "b": 2, "c": {"a": 3, "d": 4}});
        remove_keys(&mut value, &["a", "b"]);
        assert_eq!(value, json!({"c": {"d": 4}}));
    }

    #[test]
    fn test_remove_keys_no_match_is_noop() {
        let mut value = json!({"a": 1, "b": [1, 2, 3]});
        remove_keys(&mut value, &["missing"]);
        assert_eq!(value, json!({"a": 1, "b": [1, 2, 3]}));
    }

    #[test]
    fn test_remove_keys_scalar_root_is_noop() {
        let mut value = json!(42);
        remove_keys(&mut value, &["anything"]);
        assert_eq!(value, json!(42));
    }

    #[test]
    fn test_has_deep_property_top_level() {
        let value = json!({"present": true});
        assert!(has_deep_property(&value, "present"));
        assert!(!has_deep_property(&value, "absent"));
    }

    #[test]
    fn test_has_deep_property_nested() {
        let value = json!({"outer": {"middle": {"target": null}}});
        assert!(has_deep_property(&value, "target"));
    }

    #[test]
    fn test_has_deep_property_inside_array() {
        let value = json!({"records": [{"plain": 1}, {"needle": 2}]});
        assert!(has_deep_property(&value, "needle"));
    }

    #[test]
    fn test_has_deep_property_matches_keys_not_values() {
        let value = json!({"key": "needle"});
        assert!(!has_deep_property(&value, "needle"));
    }

    #[test]
    fn test_has_deep_property_scalar_root() {
        assert!(!has_deep_property(&json!("just a string"), "anything"));
    }
}
