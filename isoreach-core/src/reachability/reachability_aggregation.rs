use std::collections::HashMap;

use geojson::{FeatureCollection, JsonObject};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::Point;

/// feature property carrying the aggregated travel time in seconds
pub const TRAVEL_TIME_PROPERTY: &str = "travelTime";

/// fastest travel time in seconds for each target, built by [`super::aggregate`].
/// unreached targets hold the sentinel value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityAggregation {
    travel_times: HashMap<String, i64>,
    sentinel: i64,
}

impl ReachabilityAggregation {
    pub(crate) fn new(travel_times: HashMap<String, i64>, sentinel: i64) -> Self {
        Self {
            travel_times,
            sentinel,
        }
    }

    pub fn get(&self, id: &str) -> Option<i64> {
        self.travel_times.get(id).copied()
    }

    pub fn sentinel(&self) -> i64 {
        self.sentinel
    }

    /// true if the target is known and some source reached it
    pub fn is_reached(&self, id: &str) -> bool {
        self.get(id).is_some_and(|t| t < self.sentinel)
    }

    pub fn len(&self) -> usize {
        self.travel_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travel_times.is_empty()
    }

    /// one Point feature per target, in target order, with `id` and
    /// `travelTime` properties. targets absent from the aggregation get
    /// the sentinel.
    pub fn to_feature_collection(&self, targets: &[Point]) -> FeatureCollection {
        let features = targets
            .iter()
            .map(|target| {
                let travel_time = self.get(&target.id).unwrap_or(self.sentinel);
                let mut properties = JsonObject::new();
                properties.insert(String::from("id"), target.id.clone().into());
                properties.insert(TRAVEL_TIME_PROPERTY.to_string(), travel_time.into());
                target.to_feature(properties)
            })
            .collect_vec();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
