mod app_config;
mod app_error;
mod app_event;
mod app_state;
mod cli_coordinate;
mod demo_layers;
mod demo_state;
mod isoreach_app;
mod update;

pub use app_config::{AppConfig, DatasetConfig, ENV_PREFIX};
pub use app_error::AppError;
pub use app_event::AppEvent;
pub use app_state::{AppState, Effect};
pub use cli_coordinate::{parse_coordinate, CliCoordinate};
pub use demo_state::{DemoState, MAX_RANGE_MINUTES};
pub use isoreach_app::{DemoOperation, IsoreachApp};
pub use update::{run_events, update, NO_ROUTE_MESSAGE};
