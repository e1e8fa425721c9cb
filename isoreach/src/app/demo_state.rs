use isoreach_core::{
    model::{IntersectionMode, Point, TravelType},
    style::LayerSpec,
};
use itertools::Itertools;

use super::demo_layers;
use crate::client::{PolygonOptions, ReachabilityOptions, RouteOptions, TravelSpeed};

/// longest selectable travel time range, also the reachability search cutoff
pub const MAX_RANGE_MINUTES: u32 = 30;

/// the demo being run, with its markers, request options and loaded datasets
#[derive(Debug, Clone, PartialEq)]
pub enum DemoState {
    /// isochrone bands around one draggable source
    Polygon {
        markers: Vec<Point>,
        options: PolygonOptions,
    },
    /// combined isochrones of several draggable sources
    PolygonIntersection {
        markers: Vec<Point>,
        options: PolygonOptions,
    },
    /// a path between a draggable source and target
    Route {
        source: Point,
        target: Point,
        options: RouteOptions,
    },
    /// fastest travel time from any beach to every house
    TravelTimes {
        options: ReachabilityOptions,
        minutes: u32,
        sources: Vec<Point>,
        targets: Vec<Point>,
    },
    /// houses inside or outside the combined beach isochrone
    PolygonFiltering {
        options: PolygonOptions,
        minutes: u32,
        sources: Vec<Point>,
        targets: Vec<Point>,
    },
}

impl DemoState {
    pub fn polygon(lng: f64, lat: f64, travel_type: TravelType) -> DemoState {
        let mut options = PolygonOptions::five_minute_bands(travel_type);
        options.elevation = Some(true);
        options.walk_speed = Some(TravelSpeed { speed: 5.0 });
        options.bike_speed = Some(TravelSpeed { speed: 15.0 });
        DemoState::Polygon {
            markers: vec![Point::new("source", lng, lat)],
            options,
        }
    }

    pub fn polygon_intersection(
        coordinates: &[(f64, f64)],
        travel_type: TravelType,
        mode: IntersectionMode,
    ) -> DemoState {
        let mut options = PolygonOptions::five_minute_bands(travel_type);
        options.intersection_mode = mode;
        // sources need unique ids for the service to combine them
        let markers = coordinates
            .iter()
            .enumerate()
            .map(|(i, (lng, lat))| Point::new(format!("source-{i}"), *lng, *lat))
            .collect_vec();
        DemoState::PolygonIntersection { markers, options }
    }

    pub fn route(source: (f64, f64), target: (f64, f64), travel_type: TravelType) -> DemoState {
        DemoState::Route {
            source: Point::new("source", source.0, source.1),
            target: Point::new("target", target.0, target.1),
            options: RouteOptions::new(travel_type, 7200),
        }
    }

    pub fn travel_times(minutes: u32, travel_type: TravelType) -> DemoState {
        DemoState::TravelTimes {
            options: ReachabilityOptions::new(travel_type, MAX_RANGE_MINUTES * 60),
            minutes,
            sources: vec![],
            targets: vec![],
        }
    }

    pub fn polygon_filtering(minutes: u32) -> DemoState {
        DemoState::PolygonFiltering {
            options: PolygonOptions::new(TravelType::Walk, vec![minutes.saturating_mul(60)]),
            minutes,
            sources: vec![],
            targets: vec![],
        }
    }

    /// the selected travel time range of the travel-times and
    /// polygon-filtering demos
    pub fn range_minutes(&self) -> Option<u32> {
        match self {
            DemoState::TravelTimes { minutes, .. }
            | DemoState::PolygonFiltering { minutes, .. } => Some(*minutes),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DemoState::Polygon { .. } => "polygon",
            DemoState::PolygonIntersection { .. } => "polygon-intersection",
            DemoState::Route { .. } => "route",
            DemoState::TravelTimes { .. } => "travel-times",
            DemoState::PolygonFiltering { .. } => "polygon-filtering",
        }
    }

    /// map layers added when the map loads
    pub fn layers(&self) -> Vec<LayerSpec> {
        match self {
            DemoState::Polygon { options, .. } | DemoState::PolygonIntersection { options, .. } => {
                vec![demo_layers::polygon_bands(&options.travel_edge_weights)]
            }
            DemoState::Route { .. } => vec![demo_layers::route_line()],
            DemoState::TravelTimes { minutes, .. } => demo_layers::travel_time_points(*minutes),
            DemoState::PolygonFiltering { options, .. } => {
                let mut layers = vec![demo_layers::single_band(&options.travel_edge_weights)];
                layers.extend(demo_layers::containment_points());
                layers
            }
        }
    }
}
