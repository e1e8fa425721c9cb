//! decoding of Targomo responses.

use geojson::{Feature, FeatureCollection, GeoJson};
use isoreach_core::model::TravelRecord;
use serde_json::Value;

use super::ClientError;

/// strips the `{"code": .., "data": ..}` envelope the service wraps results in.
/// bodies without a `data` member are returned unchanged.
pub fn unwrap_envelope(value: Value) -> Result<Value, ClientError> {
    let mut obj = match value {
        Value::Object(obj) => obj,
        other => return Ok(other),
    };
    if let Some(code) = obj.get("code").and_then(Value::as_str) {
        if code != "ok" {
            let message = obj
                .get("message")
                .map(|m| m.as_str().map(String::from).unwrap_or_else(|| m.to_string()))
                .unwrap_or_default();
            return Err(ClientError::ServiceError {
                code: code.to_string(),
                message,
            });
        }
    }
    match obj.remove("data") {
        Some(data) => Ok(data),
        None => Ok(Value::Object(obj)),
    }
}

/// reads a polygon response as a FeatureCollection. a lone Feature or
/// Geometry is wrapped into a single-feature collection.
pub fn parse_polygons(value: Value) -> Result<FeatureCollection, ClientError> {
    let data = unwrap_envelope(value)?;
    let geojson = GeoJson::from_json_value(data).map_err(|e| decode_error("polygon", e))?;
    Ok(into_collection(geojson))
}

/// reads a route response. the routes may be listed directly or under a
/// `routes` member; each route is a FeatureCollection of path segments.
/// an empty list is a valid answer meaning no route was found.
pub fn parse_routes(value: Value) -> Result<Vec<FeatureCollection>, ClientError> {
    let data = unwrap_envelope(value)?;
    let routes = match data {
        Value::Null => return Ok(vec![]),
        Value::Array(routes) => routes,
        Value::Object(mut obj) => match obj.remove("routes") {
            Some(Value::Array(routes)) => routes,
            Some(Value::Null) | None => vec![],
            Some(other) => {
                return Err(decode_error(
                    "route",
                    format!("expected `routes` array, found {other}"),
                ))
            }
        },
        other => {
            return Err(decode_error(
                "route",
                format!("expected array of routes, found {other}"),
            ))
        }
    };
    routes
        .into_iter()
        .map(|route| {
            GeoJson::from_json_value(route)
                .map(into_collection)
                .map_err(|e| decode_error("route", e))
        })
        .collect()
}

/// reads a reachability response as travel records
pub fn parse_reachability(value: Value) -> Result<Vec<TravelRecord>, ClientError> {
    let data = unwrap_envelope(value)?;
    if data.is_null() {
        return Ok(vec![]);
    }
    serde_json::from_value::<Vec<TravelRecord>>(data).map_err(|e| decode_error("reachability", e))
}

fn into_collection(geojson: GeoJson) -> FeatureCollection {
    match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        GeoJson::Feature(f) => single(f),
        GeoJson::Geometry(g) => single(Feature::from(g)),
    }
}

fn single(feature: Feature) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}

fn decode_error<E: ToString>(what: &str, e: E) -> ClientError {
    ClientError::DecodeError {
        what: what.to_string(),
        msg: e.to_string(),
    }
}
