mod client_config;
mod client_error;
mod geo_service;
mod polygon_options;
mod reachability_options;
mod route_options;
mod targomo_client;

pub mod request_ops;
pub mod response_ops;

pub use client_config::TargomoClientConfig;
pub use client_error::ClientError;
pub use geo_service::GeoService;
pub use polygon_options::{PolygonOptions, TravelSpeed};
pub use reachability_options::ReachabilityOptions;
pub use route_options::RouteOptions;
pub use targomo_client::TargomoClient;
