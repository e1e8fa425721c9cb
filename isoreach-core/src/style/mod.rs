mod layer_spec;
mod paint_stops;

pub use layer_spec::{LayerSpec, LayerType};
pub use paint_stops::{color_stops, height_stops, TIME_COLORS};
