use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use isoreach_core::model::{IntersectionMode, TravelType};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{
    parse_coordinate, run_events, AppConfig, AppError, AppEvent, AppState, CliCoordinate,
    DemoState, MAX_RANGE_MINUTES,
};
use crate::render::GeoJsonDirRenderer;

/// Command line tool running the Targomo isochrone, route and reachability demos,
/// writing the map sources and layers to an output directory
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct IsoreachApp {
    /// TOML configuration file with `[client]` and `[datasets]` sections
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// directory receiving `map.json` and one GeoJSON file per map source
    #[arg(short, long, global = true, default_value_t = String::from("isoreach-out"))]
    pub out_dir: String,
    /// JSON file with a list of events to apply after the map loads
    #[arg(short, long, global = true)]
    pub events: Option<PathBuf>,
    /// select the demo to run
    #[command(subcommand)]
    pub op: DemoOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum DemoOperation {
    /// isochrone bands around a single source
    Polygon {
        /// source location as lng,lat
        #[arg(long, value_parser = parse_coordinate, default_value = "13.37,52.51")]
        source: CliCoordinate,
        #[arg(long, value_parser = parse_travel_type, default_value = "bike")]
        travel_type: TravelType,
    },
    /// union, intersection or average of the isochrones of several sources
    PolygonIntersection {
        /// source location as lng,lat, repeat for each source
        #[arg(long = "source", value_parser = parse_coordinate, default_values = ["13.4016,52.5116", "13.3756,52.5093"])]
        sources: Vec<CliCoordinate>,
        #[arg(long, value_parser = parse_travel_type, default_value = "walk")]
        travel_type: TravelType,
        #[arg(long, value_parser = parse_intersection_mode, default_value = "union")]
        mode: IntersectionMode,
    },
    /// a route between a source and a target
    Route {
        #[arg(long, value_parser = parse_coordinate, default_value = "4.335678,50.841535")]
        source: CliCoordinate,
        #[arg(long, value_parser = parse_coordinate, default_value = "4.392892,50.840536")]
        target: CliCoordinate,
        #[arg(long, value_parser = parse_travel_type, default_value = "bike")]
        travel_type: TravelType,
    },
    /// fastest travel time from any beach to each house
    TravelTimes {
        /// travel time range separating reachable houses, in minutes
        #[arg(long, value_parser = parse_minutes, default_value_t = MAX_RANGE_MINUTES)]
        minutes: u32,
        #[arg(long, value_parser = parse_travel_type, default_value = "walk")]
        travel_type: TravelType,
    },
    /// houses inside or outside the walking isochrone of the beaches
    PolygonFiltering {
        /// isochrone travel time in minutes
        #[arg(long, value_parser = parse_minutes, default_value_t = MAX_RANGE_MINUTES)]
        minutes: u32,
    },
}

impl DemoOperation {
    pub fn initial_demo(&self) -> DemoState {
        match self {
            DemoOperation::Polygon {
                source,
                travel_type,
            } => DemoState::polygon(source.lng, source.lat, *travel_type),
            DemoOperation::PolygonIntersection {
                sources,
                travel_type,
                mode,
            } => {
                let coordinates = sources.iter().map(CliCoordinate::as_tuple).collect_vec();
                DemoState::polygon_intersection(&coordinates, *travel_type, *mode)
            }
            DemoOperation::Route {
                source,
                target,
                travel_type,
            } => DemoState::route(source.as_tuple(), target.as_tuple(), *travel_type),
            DemoOperation::TravelTimes {
                minutes,
                travel_type,
            } => DemoState::travel_times(*minutes, *travel_type),
            DemoOperation::PolygonFiltering { minutes } => DemoState::polygon_filtering(*minutes),
        }
    }
}

impl IsoreachApp {
    pub fn run(&self) -> Result<(), AppError> {
        let config = AppConfig::load(self.config.as_deref())?;
        let service = config.client.build()?;
        let mut renderer = GeoJsonDirRenderer::new(&self.out_dir)?;
        let events = match &self.events {
            Some(path) => read_events(path)?,
            None => vec![],
        };
        let state = AppState::new(self.op.initial_demo(), config.datasets.clone());
        log::info!(
            "running {} demo with {} events, writing to {}",
            state.demo.name(),
            events.len(),
            self.out_dir
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                AppError::RuntimeError(format!("failure creating async rust tokio runtime: {e}"))
            })?;
        let (_, failures) =
            runtime.block_on(run_events(state, &events, &service, &mut renderer));
        if failures.is_empty() {
            Ok(())
        } else {
            Err(AppError::RunFailed(format!(
                "{} events failed: {}",
                failures.len(),
                failures.join("; ")
            )))
        }
    }
}

fn read_events(path: &Path) -> Result<Vec<AppEvent>, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|e| AppError::ReadError {
        filepath: path.display().to_string(),
        error: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| AppError::ReadError {
        filepath: path.display().to_string(),
        error: e.to_string(),
    })
}

fn parse_travel_type(s: &str) -> Result<TravelType, String> {
    s.parse()
}

fn parse_minutes(s: &str) -> Result<u32, String> {
    let minutes = s
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("not a whole number of minutes: {s}"))?;
    if (1..=MAX_RANGE_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(format!(
            "range of {minutes} minutes is outside [1,{MAX_RANGE_MINUTES}]"
        ))
    }
}

fn parse_intersection_mode(s: &str) -> Result<IntersectionMode, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::{DemoOperation, IsoreachApp};
    use crate::app::DemoState;
    use clap::Parser;
    use isoreach_core::model::{IntersectionMode, Point, TravelType};

    #[test]
    fn test_cli_defaults() {
        let app = IsoreachApp::try_parse_from(["isoreach", "route"]).unwrap();
        assert_eq!(app.out_dir, "isoreach-out");
        assert!(app.config.is_none());
        match app.op.initial_demo() {
            DemoState::Route {
                source,
                target,
                options,
            } => {
                assert_eq!(source, Point::new("source", 4.335678, 50.841535));
                assert_eq!(target, Point::new("target", 4.392892, 50.840536));
                assert_eq!(options.travel_type, TravelType::Bike);
            }
            other => panic!("unexpected demo {other:?}"),
        }
    }

    #[test]
    fn test_repeated_sources() {
        let app = IsoreachApp::try_parse_from([
            "isoreach",
            "polygon-intersection",
            "--source",
            "13.40,52.51",
            "--source",
            "13.37,52.50",
            "--source",
            "13.38,52.52",
            "--mode",
            "intersection",
        ])
        .unwrap();
        match &app.op {
            DemoOperation::PolygonIntersection { sources, mode, .. } => {
                assert_eq!(sources.len(), 3);
                assert_eq!(*mode, IntersectionMode::Intersection);
            }
            _ => panic!("expected polygon-intersection"),
        }
    }

    #[test]
    fn test_minutes_bounds() {
        for minutes in ["0", "31", "4294967295", "-5"] {
            let result =
                IsoreachApp::try_parse_from(["isoreach", "polygon-filtering", "--minutes", minutes]);
            assert!(result.is_err(), "accepted --minutes {minutes}");
        }
        let app =
            IsoreachApp::try_parse_from(["isoreach", "travel-times", "--minutes", "12"]).unwrap();
        assert_eq!(app.op.initial_demo().range_minutes(), Some(12));
    }

    #[test]
    fn test_invalid_travel_type_is_rejected() {
        let result =
            IsoreachApp::try_parse_from(["isoreach", "travel-times", "--travel-type", "boat"]);
        assert!(result.is_err());
    }
}
