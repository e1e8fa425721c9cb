use isoreach_core::{
    containment::CONTAINED_PROPERTY,
    reachability::{RangeFilter, TRAVEL_TIME_PROPERTY},
    style::{color_stops, height_stops, LayerSpec, LayerType, TIME_COLORS},
};
use serde_json::{json, Value};

pub const POLYGON_SOURCE: &str = "polygon";
pub const ROUTE_SOURCE: &str = "route";
pub const SOURCES_SOURCE: &str = "sources";
pub const TARGETS_SOURCE: &str = "targets";

pub const POLYGON_LAYER: &str = "polygons";
pub const ROUTE_LAYER: &str = "route";
pub const SOURCES_LAYER: &str = "beaches";
pub const REACHABLE_LAYER: &str = "houses-reachable";
pub const UNREACHABLE_LAYER: &str = "houses-unreachable";

/// padding in pixels when fitting the viewport to a response
pub const FIT_PADDING: u32 = 20;

/// extruded bands colored and scaled by their `time` property
pub fn polygon_bands(travel_times: &[u32]) -> LayerSpec {
    extrusion(
        height_stops(travel_times, 2.0),
        color_stops(travel_times, &TIME_COLORS),
    )
}

/// a flat extrusion for a single travel time band
pub fn single_band(travel_times: &[u32]) -> LayerSpec {
    let stops = travel_times.iter().map(|t| json!([t, 10])).collect::<Vec<_>>();
    extrusion(
        Value::Array(stops),
        color_stops(travel_times, &TIME_COLORS[..1]),
    )
}

fn extrusion(height: Value, color: Value) -> LayerSpec {
    LayerSpec::new(
        POLYGON_LAYER,
        POLYGON_SOURCE,
        LayerType::FillExtrusion,
        json!({
            "fill-extrusion-base": 0,
            "fill-extrusion-height": { "property": "time", "stops": height },
            "fill-extrusion-color": { "property": "time", "stops": color },
            "fill-extrusion-opacity": 0.5
        }),
    )
}

/// route segments colored by the mode of each leg
pub fn route_line() -> LayerSpec {
    LayerSpec::new(
        ROUTE_LAYER,
        ROUTE_SOURCE,
        LayerType::Line,
        json!({
            "line-color": [
                "match", ["get", "travelType"],
                "TRANSIT", "red",
                "WALK", "green",
                "BIKE", "blue",
                "gray"
            ],
            "line-width": 4
        }),
    )
    .with_filter(json!(["==", ["geometry-type"], "LineString"]))
}

fn beaches() -> LayerSpec {
    LayerSpec::new(
        SOURCES_LAYER,
        SOURCES_SOURCE,
        LayerType::Circle,
        json!({
            "circle-radius": 7,
            "circle-color": "#DAA520",
            "circle-stroke-width": 1.5,
            "circle-stroke-color": "#fff"
        }),
    )
}

fn house_radius() -> Value {
    json!({ "base": 1.75, "stops": [[12, 2], [22, 180]] })
}

/// beaches plus houses split by travel time at `minutes`
pub fn travel_time_points(minutes: u32) -> Vec<LayerSpec> {
    let range = RangeFilter::from_minutes(minutes);
    vec![
        beaches(),
        LayerSpec::new(
            REACHABLE_LAYER,
            TARGETS_SOURCE,
            LayerType::Circle,
            json!({
                "circle-radius": house_radius(),
                "circle-color": {
                    "property": TRAVEL_TIME_PROPERTY,
                    "stops": [
                        [360, "#1a9641"],
                        [720, "#a6d96a"],
                        [1080, "#ffffbf"],
                        [1440, "#fdae61"],
                        [1800, "#d7191c"]
                    ]
                }
            }),
        )
        .with_filter(range.reachable_filter())
        .before(SOURCES_LAYER),
        LayerSpec::new(
            UNREACHABLE_LAYER,
            TARGETS_SOURCE,
            LayerType::Circle,
            json!({ "circle-radius": house_radius(), "circle-color": "#aaa" }),
        )
        .with_filter(range.unreachable_filter())
        .before(REACHABLE_LAYER),
    ]
}

/// beaches plus houses split by whether the isochrone contains them
pub fn containment_points() -> Vec<LayerSpec> {
    vec![
        beaches(),
        LayerSpec::new(
            REACHABLE_LAYER,
            TARGETS_SOURCE,
            LayerType::Circle,
            json!({ "circle-radius": house_radius(), "circle-color": "#0000FF", "circle-opacity": 0.7 }),
        )
        .with_filter(json!(["==", CONTAINED_PROPERTY, true]))
        .before(SOURCES_LAYER),
        LayerSpec::new(
            UNREACHABLE_LAYER,
            TARGETS_SOURCE,
            LayerType::Circle,
            json!({ "circle-radius": house_radius(), "circle-color": "#FF0000", "circle-opacity": 0.2 }),
        )
        .with_filter(json!(["==", CONTAINED_PROPERTY, false]))
        .before(REACHABLE_LAYER),
    ]
}
