use isoreach_core::model::TravelType;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptions {
    pub travel_type: TravelType,
    /// search cutoff in seconds
    pub max_edge_weight: u32,
    pub edge_weight: String,
    pub path_serializer: String,
    pub srid: u32,
}

impl RouteOptions {
    pub fn new(travel_type: TravelType, max_edge_weight: u32) -> RouteOptions {
        RouteOptions {
            travel_type,
            max_edge_weight,
            edge_weight: String::from("time"),
            path_serializer: String::from("geojson"),
            srid: 4326,
        }
    }
}
