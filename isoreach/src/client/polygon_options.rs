use isoreach_core::model::{IntersectionMode, TravelType};
use serde::{Deserialize, Serialize};

/// speed override for walk or bike travel, in km/h
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TravelSpeed {
    pub speed: f64,
}

/// parameters of an isochrone polygon request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolygonOptions {
    pub travel_type: TravelType,
    /// band upper bounds in seconds, ascending
    pub travel_edge_weights: Vec<u32>,
    pub edge_weight: String,
    pub srid: u32,
    pub intersection_mode: IntersectionMode,
    pub serializer: String,
    /// simplification tolerance in meters
    pub simplify: u32,
    pub quadrant_segments: u32,
    /// buffer in degrees around each polygon
    pub buffer: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_speed: Option<TravelSpeed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bike_speed: Option<TravelSpeed>,
}

impl PolygonOptions {
    /// GeoJSON polygons in WGS84 with the simplification used by every demo
    pub fn new(travel_type: TravelType, travel_edge_weights: Vec<u32>) -> PolygonOptions {
        PolygonOptions {
            travel_type,
            travel_edge_weights,
            edge_weight: String::from("time"),
            srid: 4326,
            intersection_mode: IntersectionMode::Union,
            serializer: String::from("geojson"),
            simplify: 200,
            quadrant_segments: 6,
            buffer: 0.002,
            elevation: None,
            walk_speed: None,
            bike_speed: None,
        }
    }

    /// six 5-minute bands up to 30 minutes
    pub fn five_minute_bands(travel_type: TravelType) -> PolygonOptions {
        PolygonOptions::new(travel_type, vec![300, 600, 900, 1200, 1500, 1800])
    }
}
