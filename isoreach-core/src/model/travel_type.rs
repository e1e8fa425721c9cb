use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// transport mode requested from the isochrone service
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Walk,
    Bike,
    Car,
    Transit,
}

impl Display for TravelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelType::Walk => write!(f, "walk"),
            TravelType::Bike => write!(f, "bike"),
            TravelType::Car => write!(f, "car"),
            TravelType::Transit => write!(f, "transit"),
        }
    }
}

impl FromStr for TravelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walk" => Ok(TravelType::Walk),
            "bike" => Ok(TravelType::Bike),
            "car" => Ok(TravelType::Car),
            "transit" => Ok(TravelType::Transit),
            other => Err(format!(
                "unknown travel type '{other}', expected one of walk, bike, car, transit"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TravelType;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Bike".parse::<TravelType>(), Ok(TravelType::Bike));
        assert_eq!(" transit ".parse::<TravelType>(), Ok(TravelType::Transit));
        assert!("boat".parse::<TravelType>().is_err());
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_value(TravelType::Walk).unwrap();
        assert_eq!(json, serde_json::json!("walk"));
    }
}
