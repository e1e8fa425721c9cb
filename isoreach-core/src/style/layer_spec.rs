use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LayerType {
    FillExtrusion,
    Circle,
    Line,
}

/// a map layer drawing one named data source
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub id: String,
    pub source: String,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub paint: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// id of the layer this one is inserted beneath
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl LayerSpec {
    pub fn new(id: &str, source: &str, layer_type: LayerType, paint: Value) -> LayerSpec {
        LayerSpec {
            id: id.to_string(),
            source: source.to_string(),
            layer_type,
            paint,
            filter: None,
            before: None,
        }
    }

    pub fn with_filter(mut self, filter: Value) -> LayerSpec {
        self.filter = Some(filter);
        self
    }

    pub fn before(mut self, layer_id: &str) -> LayerSpec {
        self.before = Some(layer_id.to_string());
        self
    }
}
