use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::TRAVEL_TIME_PROPERTY;

/// splits travel-time features into a reachable and an unreachable layer at
/// a travel time threshold. the two filters are complementary, so every
/// feature lands in exactly one layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    /// threshold in seconds. features strictly below it are reachable.
    pub max_travel_time: i64,
}

impl RangeFilter {
    pub fn from_minutes(minutes: u32) -> RangeFilter {
        RangeFilter {
            max_travel_time: i64::from(minutes) * 60,
        }
    }

    /// map-style filter expression for the reachable layer
    pub fn reachable_filter(&self) -> Value {
        json!(["<", TRAVEL_TIME_PROPERTY, self.max_travel_time])
    }

    /// map-style filter expression for the unreachable layer
    pub fn unreachable_filter(&self) -> Value {
        json!([">=", TRAVEL_TIME_PROPERTY, self.max_travel_time])
    }

    /// whether a travel time passes the reachable filter
    pub fn is_within(&self, travel_time: i64) -> bool {
        travel_time < self.max_travel_time
    }
}

#[cfg(test)]
mod tests {
    use super::RangeFilter;

    #[test]
    fn test_filters_use_seconds() {
        let filter = RangeFilter::from_minutes(20);
        assert_eq!(
            filter.reachable_filter(),
            serde_json::json!(["<", "travelTime", 1200])
        );
        assert_eq!(
            filter.unreachable_filter(),
            serde_json::json!([">=", "travelTime", 1200])
        );
    }

    #[test]
    fn test_threshold_partitions_travel_times() {
        let filter = RangeFilter::from_minutes(30);
        assert!(filter.is_within(0));
        assert!(filter.is_within(1799));
        assert!(!filter.is_within(1800));
        // the travel-times sentinel for a 30 minute search
        assert!(!filter.is_within(1801));
    }
}
