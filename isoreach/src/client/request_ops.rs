//! JSON request bodies for the Targomo REST endpoints.

use isoreach_core::model::{Point, TravelType};
use serde_json::{json, Map, Value};

use super::{PolygonOptions, ReachabilityOptions, RouteOptions, TravelSpeed};

/// body of a `polygon` request. every source carries the travel mode, the
/// polygon section carries the band values and the geometry post-processing.
pub fn polygon_request(sources: &[Point], options: &PolygonOptions) -> Value {
    let speed = match options.travel_type {
        TravelType::Walk => options.walk_speed.as_ref(),
        TravelType::Bike => options.bike_speed.as_ref(),
        _ => None,
    };
    let tm = travel_mode(&options.travel_type, speed);
    let mut body = json!({
        "sources": sources.iter().map(|s| source_location(s, &tm)).collect::<Vec<_>>(),
        "edgeWeight": options.edge_weight,
        "polygon": {
            "values": options.travel_edge_weights,
            "intersectionMode": options.intersection_mode,
            "serializer": options.serializer,
            "srid": options.srid,
            "simplify": options.simplify,
            "quadrantSegments": options.quadrant_segments,
            "buffer": options.buffer,
        },
    });
    if let (Some(elevation), Some(obj)) = (options.elevation, body.as_object_mut()) {
        obj.insert(String::from("elevation"), Value::Bool(elevation));
    }
    body
}

/// body of a `route` request
pub fn route_request(sources: &[Point], targets: &[Point], options: &RouteOptions) -> Value {
    let tm = travel_mode(&options.travel_type, None);
    json!({
        "sources": sources.iter().map(|s| source_location(s, &tm)).collect::<Vec<_>>(),
        "targets": targets.iter().map(target_location).collect::<Vec<_>>(),
        "maxEdgeWeight": options.max_edge_weight,
        "edgeWeight": options.edge_weight,
        "pathSerializer": options.path_serializer,
        "polygon": { "srid": options.srid },
    })
}

/// body of a `reachability` request
pub fn reachability_request(
    sources: &[Point],
    targets: &[Point],
    options: &ReachabilityOptions,
) -> Value {
    let tm = travel_mode(&options.travel_type, None);
    json!({
        "sources": sources.iter().map(|s| source_location(s, &tm)).collect::<Vec<_>>(),
        "targets": targets.iter().map(target_location).collect::<Vec<_>>(),
        "maxEdgeWeight": options.max_edge_weight,
        "edgeWeight": options.edge_weight,
    })
}

/// the `tm` object, keyed by travel type, e.g. `{"bike": {"speed": 15.0}}`
fn travel_mode(travel_type: &TravelType, speed: Option<&TravelSpeed>) -> Value {
    let mut settings = Map::new();
    if let Some(s) = speed {
        settings.insert(String::from("speed"), json!(s.speed));
    }
    let mut tm = Map::new();
    tm.insert(travel_type.to_string(), Value::Object(settings));
    Value::Object(tm)
}

fn source_location(point: &Point, tm: &Value) -> Value {
    json!({ "id": point.id, "lat": point.lat, "lng": point.lng, "tm": tm })
}

fn target_location(point: &Point) -> Value {
    json!({ "id": point.id, "lat": point.lat, "lng": point.lng })
}
