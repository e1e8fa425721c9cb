use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// how the service combines the polygons of multiple sources
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntersectionMode {
    #[default]
    Union,
    Intersection,
    Average,
}

impl Display for IntersectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntersectionMode::Union => write!(f, "union"),
            IntersectionMode::Intersection => write!(f, "intersection"),
            IntersectionMode::Average => write!(f, "average"),
        }
    }
}

impl FromStr for IntersectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "union" => Ok(IntersectionMode::Union),
            "intersection" => Ok(IntersectionMode::Intersection),
            "average" => Ok(IntersectionMode::Average),
            other => Err(format!(
                "unknown intersection mode '{other}', expected one of union, intersection, average"
            )),
        }
    }
}
