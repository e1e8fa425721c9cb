use serde::{Deserialize, Serialize};

use super::deserialize_identifier;

/// travel time reported by the service for a target that could not be reached
pub const UNREACHABLE: i64 = -1;

/// one (target, travel time) pair returned by the reachability service
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TravelRecord {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id: String,
    /// travel time in seconds, or [`UNREACHABLE`]
    #[serde(rename = "travelTime")]
    pub travel_time: i64,
}

impl TravelRecord {
    pub fn new<S: Into<String>>(id: S, travel_time: i64) -> TravelRecord {
        TravelRecord {
            id: id.into(),
            travel_time,
        }
    }

    /// true when the record carries a real travel time. anything at or
    /// below [`UNREACHABLE`] means no path was found.
    pub fn is_reachable(&self) -> bool {
        self.travel_time > UNREACHABLE
    }
}
