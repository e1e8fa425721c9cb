use isoreach_core::style::LayerSpec;
use serde::{Deserialize, Serialize};

/// everything about the map besides source data: layers, viewport and the
/// on-screen message. written next to the source files as `map.json`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MapManifest {
    pub layers: Vec<LayerSpec>,
    /// [xmin, ymin, xmax, ymax]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<[f64; 4]>,
    #[serde(default)]
    pub padding: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// names of sources that have received data
    pub sources: Vec<String>,
}
