use serde::{Deserialize, Serialize};

/// a WGS84 location given on the command line as `lng,lat`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CliCoordinate {
    pub lng: f64,
    pub lat: f64,
}

impl CliCoordinate {
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}

pub fn parse_coordinate(s: &str) -> Result<CliCoordinate, String> {
    let parts: Vec<&str> = s.split(',').collect();
    match parts.as_slice() {
        [lng, lat] => Ok(CliCoordinate {
            lng: parse_lng(lng)?,
            lat: parse_lat(lat)?,
        }),
        _ => Err(format!("expected format: lng,lat, got: {s}")),
    }
}

impl std::fmt::Display for CliCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

fn parse_lat(lat: &str) -> Result<f64, String> {
    parse_num(lat, -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"))
}

fn parse_lng(lng: &str) -> Result<f64, String> {
    parse_num(lng, -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"))
}

fn parse_num(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))?;
    if !(min..=max).contains(&v) {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_coordinate, CliCoordinate};

    #[test]
    fn test_parse_coordinate() {
        let c = parse_coordinate("13.37, 52.51").unwrap();
        assert_eq!(
            c,
            CliCoordinate {
                lng: 13.37,
                lat: 52.51
            }
        );
        assert_eq!(c.to_string(), "13.37,52.51");
    }

    #[test]
    fn test_rejects_out_of_range_and_malformed() {
        assert!(parse_coordinate("52.51,13.37,1").is_err());
        assert!(parse_coordinate("13.37").is_err());
        assert!(parse_coordinate("13.37,95").is_err());
        assert!(parse_coordinate("-181,0").is_err());
        assert!(parse_coordinate("east,0").is_err());
    }
}
