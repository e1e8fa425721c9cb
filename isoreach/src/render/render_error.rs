#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failure writing '{path}': {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("no layer with id '{0}' has been added")]
    UnknownLayer(String),
}
