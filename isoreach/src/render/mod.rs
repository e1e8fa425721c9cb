mod geojson_dir_renderer;
mod map_manifest;
mod map_renderer;
mod render_error;

pub use geojson_dir_renderer::GeoJsonDirRenderer;
pub use map_manifest::MapManifest;
pub use map_renderer::MapRenderer;
pub use render_error::RenderError;
