use geo::Coord;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value as GeoJsonValue};
use serde::{Deserialize, Serialize};

use super::{deserialize_identifier, identifier::identifier_from_value, FeatureError};

/// property holding the identifier of features in OSM/Overpass exports
pub const ID_PROPERTY: &str = "@id";

/// a named WGS84 location sent to the service as a source or target
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Point {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id: String,
    pub lng: f64,
    pub lat: f64,
}

impl Point {
    pub fn new<S: Into<String>>(id: S, lng: f64, lat: f64) -> Point {
        Point {
            id: id.into(),
            lng,
            lat,
        }
    }

    /// same identifier at a new location, as when a marker is dragged
    pub fn moved_to(&self, lng: f64, lat: f64) -> Point {
        Point::new(self.id.clone(), lng, lat)
    }

    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    /// builds a GeoJSON Point feature at this location with the given properties
    pub fn to_feature(&self, properties: JsonObject) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(GeoJsonValue::Point(vec![self.lng, self.lat]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    /// reads a point from a GeoJSON feature, using the `@id` property as the
    /// identifier and falling back to the feature id.
    ///
    /// # Arguments
    ///
    /// * `index` - position of the feature in its collection, used in error messages
    /// * `feature` - a feature with a Point geometry
    pub fn try_from_feature(index: usize, feature: &Feature) -> Result<Point, FeatureError> {
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or(FeatureError::MissingGeometry { index })?;
        let position = match &geometry.value {
            GeoJsonValue::Point(position) => position,
            other => {
                return Err(FeatureError::UnsupportedGeometry {
                    index,
                    geometry_type: geometry_type_name(other).to_string(),
                })
            }
        };
        let (lng, lat) = match position.as_slice() {
            [lng, lat, ..] => (*lng, *lat),
            _ => {
                return Err(FeatureError::InvalidCoordinates {
                    index,
                    msg: format!("expected [lng, lat], found {position:?}"),
                })
            }
        };
        if !lng.is_finite() || !lat.is_finite() {
            return Err(FeatureError::InvalidCoordinates {
                index,
                msg: format!("non-finite coordinate [{lng}, {lat}]"),
            });
        }

        let property_id = feature
            .properties
            .as_ref()
            .and_then(|p| p.get(ID_PROPERTY))
            .and_then(identifier_from_value);
        let feature_id = feature.id.as_ref().map(|id| match id {
            geojson::feature::Id::String(s) => s.clone(),
            geojson::feature::Id::Number(n) => n.to_string(),
        });
        let id = property_id
            .or(feature_id)
            .ok_or(FeatureError::MissingIdentifier { index })?;

        Ok(Point::new(id, lng, lat))
    }
}

fn geometry_type_name(value: &GeoJsonValue) -> &'static str {
    match value {
        GeoJsonValue::Point(_) => "Point",
        GeoJsonValue::MultiPoint(_) => "MultiPoint",
        GeoJsonValue::LineString(_) => "LineString",
        GeoJsonValue::MultiLineString(_) => "MultiLineString",
        GeoJsonValue::Polygon(_) => "Polygon",
        GeoJsonValue::MultiPolygon(_) => "MultiPolygon",
        GeoJsonValue::GeometryCollection(_) => "GeometryCollection",
    }
}

/// reads every feature of a collection as a [`Point`], failing on the first
/// feature that is not an identified Point.
pub fn points_from_collection(collection: &FeatureCollection) -> Result<Vec<Point>, FeatureError> {
    collection
        .features
        .iter()
        .enumerate()
        .map(|(index, feature)| Point::try_from_feature(index, feature))
        .collect()
}
