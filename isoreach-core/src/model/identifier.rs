use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// reads an identifier that may arrive as either a JSON string or a JSON number.
/// OSM exports use strings like "way/123" while the reachability service echoes
/// back whatever was sent, so numeric ids are normalized to their string form.
pub fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number identifier, found {other}"
        ))),
    }
}

/// string form of a JSON identifier value, if it is a string or number
pub(crate) fn identifier_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
