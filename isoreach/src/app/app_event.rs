use isoreach_core::model::{IntersectionMode, TravelType};
use serde::{Deserialize, Serialize};

/// user interactions, dispatched one at a time into [`super::update`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// the map finished loading; add layers and run the first request
    Load,
    /// a marker was dragged to a new location. for the route demo, index 0
    /// is the source and index 1 the target.
    MarkerMoved { index: usize, lng: f64, lat: f64 },
    TravelTypeSelected { travel_type: TravelType },
    IntersectionModeSelected { mode: IntersectionMode },
    /// the travel time range slider moved
    RangeSelected { minutes: u32 },
}

#[cfg(test)]
mod tests {
    use super::AppEvent;
    use isoreach_core::model::TravelType;

    #[test]
    fn test_event_script_deserializes() {
        let script = serde_json::json!([
            { "type": "load" },
            { "type": "marker_moved", "index": 1, "lng": 13.4, "lat": 52.5 },
            { "type": "travel_type_selected", "travel_type": "car" },
            { "type": "range_selected", "minutes": 15 }
        ]);
        let events: Vec<AppEvent> = serde_json::from_value(script).unwrap();
        assert_eq!(
            events,
            vec![
                AppEvent::Load,
                AppEvent::MarkerMoved {
                    index: 1,
                    lng: 13.4,
                    lat: 52.5
                },
                AppEvent::TravelTypeSelected {
                    travel_type: TravelType::Car
                },
                AppEvent::RangeSelected { minutes: 15 },
            ]
        );
    }
}
