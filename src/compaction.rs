/// Compacted form of a JSON-LD object, used by suites which set compact_before_canonicalize:
/// null-valued members are removed and single-element arrays are replaced by their element,
/// recursively.  The result depends only on content, so signing and verification agree on it.
pub fn compacted(
    object: &serde_json::Map<String, serde_json::Value>,
) -> serde_json::Map<String, serde_json::Value> {
    object
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), compacted_value(value)))
        .collect()
}

fn compacted_value(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(object) => serde_json::Value::Object(compacted(object)),
        serde_json::Value::Array(element_v) if element_v.len() == 1 => {
            compacted_value(&element_v[0])
        }
        serde_json::Value::Array(element_v) => {
            serde_json::Value::Array(element_v.iter().map(compacted_value).collect())
        }
        _ => value.clone(),
    }
}
