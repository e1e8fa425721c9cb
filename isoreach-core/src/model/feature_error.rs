#[derive(thiserror::Error, Debug)]
pub enum FeatureError {
    #[error("feature {index} has no geometry")]
    MissingGeometry { index: usize },
    #[error("feature {index} has unsupported geometry type '{geometry_type}', expected Point")]
    UnsupportedGeometry {
        index: usize,
        geometry_type: String,
    },
    #[error("feature {index} has neither an '@id' property nor a feature id")]
    MissingIdentifier { index: usize },
    #[error("feature {index} has invalid coordinates: {msg}")]
    InvalidCoordinates { index: usize, msg: String },
    #[error("failure converting GeoJSON geometry: {source}")]
    GeoJsonError {
        #[from]
        source: geojson::Error,
    },
}
