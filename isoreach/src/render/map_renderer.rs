use geo::Rect;
use geojson::FeatureCollection;
use isoreach_core::style::LayerSpec;
use serde_json::Value;

use super::RenderError;

/// the map widget the app draws into. data is published to named sources,
/// and layers added up front decide how each source is drawn.
pub trait MapRenderer {
    fn add_layer(&mut self, layer: LayerSpec) -> Result<(), RenderError>;

    /// replaces the data of a named source
    fn set_source_data(&mut self, source: &str, data: FeatureCollection)
        -> Result<(), RenderError>;

    /// replaces the filter expression of an existing layer
    fn set_filter(&mut self, layer_id: &str, filter: Value) -> Result<(), RenderError>;

    /// moves the viewport to show `bounds`, with `padding` pixels around it
    fn fit_bounds(&mut self, bounds: Rect<f64>, padding: u32) -> Result<(), RenderError>;

    fn show_message(&mut self, message: &str) -> Result<(), RenderError>;

    fn clear_message(&mut self) -> Result<(), RenderError>;

    /// shows or hides the busy indicator
    fn set_progress(&mut self, visible: bool);
}
