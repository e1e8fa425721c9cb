use std::path::{Path, PathBuf};

use geo::Rect;
use geojson::FeatureCollection;
use isoreach_core::style::LayerSpec;
use serde_json::Value;

use super::{MapManifest, MapRenderer, RenderError};

/// renders into a directory: each source becomes `<source>.geojson` and the
/// layers, viewport and message are kept in `map.json`.
pub struct GeoJsonDirRenderer {
    out_dir: PathBuf,
    manifest: MapManifest,
}

pub const MANIFEST_FILENAME: &str = "map.json";

impl GeoJsonDirRenderer {
    /// creates the output directory if needed
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Result<GeoJsonDirRenderer, RenderError> {
        let out_dir = out_dir.as_ref().to_path_buf();
        create_dirs(&out_dir)?;
        Ok(GeoJsonDirRenderer {
            out_dir,
            manifest: MapManifest::default(),
        })
    }

    pub fn manifest(&self) -> &MapManifest {
        &self.manifest
    }

    pub fn source_path(&self, source: &str) -> PathBuf {
        self.out_dir.join(format!("{source}.geojson"))
    }

    fn write_manifest(&self) -> Result<(), RenderError> {
        let contents = serde_json::to_string_pretty(&self.manifest)?;
        write_file(&self.out_dir.join(MANIFEST_FILENAME), &contents)
    }
}

impl MapRenderer for GeoJsonDirRenderer {
    fn add_layer(&mut self, layer: LayerSpec) -> Result<(), RenderError> {
        // `before` places the new layer beneath an existing one
        let position = layer
            .before
            .as_ref()
            .and_then(|b| self.manifest.layers.iter().position(|l| &l.id == b));
        match position {
            Some(idx) => self.manifest.layers.insert(idx, layer),
            None => self.manifest.layers.push(layer),
        }
        self.write_manifest()
    }

    fn set_source_data(
        &mut self,
        source: &str,
        data: FeatureCollection,
    ) -> Result<(), RenderError> {
        let path = self.source_path(source);
        log::info!(
            "writing {} features of source '{source}' to {}",
            data.features.len(),
            path.display()
        );
        write_file(&path, &serde_json::to_string(&data)?)?;
        if !self.manifest.sources.iter().any(|s| s == source) {
            self.manifest.sources.push(source.to_string());
            self.write_manifest()?;
        }
        Ok(())
    }

    fn set_filter(&mut self, layer_id: &str, filter: Value) -> Result<(), RenderError> {
        let layer = self
            .manifest
            .layers
            .iter_mut()
            .find(|l| l.id == layer_id)
            .ok_or_else(|| RenderError::UnknownLayer(layer_id.to_string()))?;
        layer.filter = Some(filter);
        self.write_manifest()
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>, padding: u32) -> Result<(), RenderError> {
        self.manifest.bounds = Some([
            bounds.min().x,
            bounds.min().y,
            bounds.max().x,
            bounds.max().y,
        ]);
        self.manifest.padding = padding;
        self.write_manifest()
    }

    fn show_message(&mut self, message: &str) -> Result<(), RenderError> {
        log::warn!("{message}");
        self.manifest.message = Some(message.to_string());
        self.write_manifest()
    }

    fn clear_message(&mut self) -> Result<(), RenderError> {
        if self.manifest.message.take().is_some() {
            self.write_manifest()?;
        }
        Ok(())
    }

    fn set_progress(&mut self, visible: bool) {
        if visible {
            log::info!("working...");
        }
    }
}

/// helper function to "mkdir -p path" - make all directories along a path
fn create_dirs(dirspath: &Path) -> Result<(), RenderError> {
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|source| RenderError::IoError {
            path: dirspath.to_str().unwrap_or_default().to_string(),
            source,
        })
    } else {
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|source| RenderError::IoError {
        path: path.to_str().unwrap_or_default().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{GeoJsonDirRenderer, MANIFEST_FILENAME};
    use crate::render::{MapManifest, MapRenderer, RenderError};
    use geojson::FeatureCollection;
    use isoreach_core::style::{LayerSpec, LayerType};
    use serde_json::json;
    use std::path::PathBuf;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "isoreach-renderer-{}-{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn read_manifest(dir: &PathBuf) -> MapManifest {
        let text = std::fs::read_to_string(dir.join(MANIFEST_FILENAME)).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_writes_source_and_manifest() {
        let dir = test_dir("sources");
        let mut renderer = GeoJsonDirRenderer::new(&dir).unwrap();
        let fc = FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        };
        renderer.set_source_data("polygon", fc).unwrap();
        let written = std::fs::read_to_string(dir.join("polygon.geojson")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["type"], json!("FeatureCollection"));
        assert_eq!(read_manifest(&dir).sources, vec![String::from("polygon")]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_layer_inserted_before_existing_layer() {
        let dir = test_dir("layers");
        let mut renderer = GeoJsonDirRenderer::new(&dir).unwrap();
        renderer
            .add_layer(LayerSpec::new("beaches", "sources", LayerType::Circle, json!({})))
            .unwrap();
        renderer
            .add_layer(
                LayerSpec::new("houses", "targets", LayerType::Circle, json!({}))
                    .before("beaches"),
            )
            .unwrap();
        let ids = read_manifest(&dir)
            .layers
            .iter()
            .map(|l| l.id.clone())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["houses", "beaches"]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_filter_on_unknown_layer_fails() {
        let dir = test_dir("filters");
        let mut renderer = GeoJsonDirRenderer::new(&dir).unwrap();
        let result = renderer.set_filter("nope", json!(["<", "travelTime", 60]));
        assert!(matches!(result, Err(RenderError::UnknownLayer(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_message_round_trip() {
        let dir = test_dir("message");
        let mut renderer = GeoJsonDirRenderer::new(&dir).unwrap();
        renderer.show_message("no route found").unwrap();
        assert_eq!(
            read_manifest(&dir).message.as_deref(),
            Some("no route found")
        );
        renderer.clear_message().unwrap();
        assert_eq!(renderer.manifest().message, None);
        assert_eq!(read_manifest(&dir).message, None);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
