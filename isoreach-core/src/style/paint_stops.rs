use serde_json::{json, Value};

/// colors for the six 5-minute travel time bands, fastest first
pub const TIME_COLORS: [&str; 6] = [
    "#006837", "#39B54A", "#8CC63F", "#F7931E", "#F15A24", "#C1272D",
];

/// extrusion height stops for polygon bands. the fastest band is drawn tallest
/// so nested isochrones stay visible.
///
/// # Arguments
///
/// * `travel_times` - band upper bounds in seconds, ascending
/// * `height_factor` - scales both stops
///
/// # Returns
///
/// `[[first, n * 10 * factor], [last, n * factor]]` where n is the band count,
/// or an empty array when there are no bands
pub fn height_stops(travel_times: &[u32], height_factor: f64) -> Value {
    match (travel_times.first(), travel_times.last()) {
        (Some(first), Some(last)) => {
            let n = travel_times.len() as f64;
            json!([
                [first, n * (10.0 * height_factor)],
                [last, n * height_factor]
            ])
        }
        _ => json!([]),
    }
}

/// pairs each band upper bound with a color, stopping at the shorter list
pub fn color_stops(travel_times: &[u32], colors: &[&str]) -> Value {
    let stops = travel_times
        .iter()
        .zip(colors.iter())
        .map(|(time, color)| json!([time, color]))
        .collect::<Vec<_>>();
    Value::Array(stops)
}
