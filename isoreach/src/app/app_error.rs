use crate::{client::ClientError, render::RenderError};
use isoreach_core::{model::FeatureError, reachability::ReachabilityError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("remote service failure: {source}")]
    ClientError {
        #[from]
        source: ClientError,
    },
    #[error("failure updating the map: {source}")]
    RenderError {
        #[from]
        source: RenderError,
    },
    #[error("invalid dataset: {source}")]
    FeatureError {
        #[from]
        source: FeatureError,
    },
    #[error("failure aggregating reachability: {source}")]
    ReachabilityError {
        #[from]
        source: ReachabilityError,
    },
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("event not applicable: {0}")]
    InvalidEvent(String),
    #[error("error creating a runtime to handle async code: {0}")]
    RuntimeError(String),
    #[error("{0}")]
    RunFailed(String),
}
