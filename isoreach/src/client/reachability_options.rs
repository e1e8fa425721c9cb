use isoreach_core::model::TravelType;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReachabilityOptions {
    pub travel_type: TravelType,
    /// search cutoff in seconds. targets beyond it come back with travel time -1.
    pub max_edge_weight: u32,
    pub edge_weight: String,
}

impl ReachabilityOptions {
    pub fn new(travel_type: TravelType, max_edge_weight: u32) -> ReachabilityOptions {
        ReachabilityOptions {
            travel_type,
            max_edge_weight,
            edge_weight: String::from("time"),
        }
    }

    /// travel time assigned to targets outside the search, one second past the cutoff
    pub fn unreachable_sentinel(&self) -> i64 {
        i64::from(self.max_edge_weight) + 1
    }
}
