use geo::{Contains, Geometry, MultiPolygon, Polygon};
use geojson::{FeatureCollection, JsonObject};

use crate::model::{FeatureError, Point};

/// feature property flagging whether a target lies inside the service polygons
pub const CONTAINED_PROPERTY: &str = "contained";

/// collects the polygonal geometries of a service response. features without
/// geometry or with non-polygonal geometry are skipped.
pub fn polygons_from_collection(
    collection: &FeatureCollection,
) -> Result<MultiPolygon<f64>, FeatureError> {
    let mut polygons: Vec<Polygon<f64>> = vec![];
    for feature in collection.features.iter() {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        match Geometry::<f64>::try_from(geometry.value.clone())? {
            Geometry::Polygon(p) => polygons.push(p),
            Geometry::MultiPolygon(mp) => polygons.extend(mp.0),
            other => log::debug!("ignoring non-polygonal geometry {other:?} in polygon response"),
        }
    }
    Ok(MultiPolygon::new(polygons))
}

/// tags each target with whether any of the service polygons contains it.
///
/// # Arguments
///
/// * `targets` - locations to test
/// * `polygons` - polygon FeatureCollection returned by the isochrone service
///
/// # Returns
///
/// one Point feature per target, in order, with `id` and `contained` properties
pub fn mark_containment(
    targets: &[Point],
    polygons: &FeatureCollection,
) -> Result<FeatureCollection, FeatureError> {
    let area = polygons_from_collection(polygons)?;
    let mut n_contained = 0;
    let features = targets
        .iter()
        .map(|target| {
            let contained = area.contains(&geo::Point::from(target.coord()));
            if contained {
                n_contained += 1;
            }
            let mut properties = JsonObject::new();
            properties.insert(String::from("id"), target.id.clone().into());
            properties.insert(CONTAINED_PROPERTY.to_string(), contained.into());
            target.to_feature(properties)
        })
        .collect::<Vec<_>>();
    log::debug!(
        "{n_contained} of {} targets contained by {} polygons",
        targets.len(),
        area.0.len()
    );
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}
