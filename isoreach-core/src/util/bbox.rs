use geo::{BoundingRect, Coord, Geometry, Rect};
use geojson::FeatureCollection;

use crate::model::FeatureError;

/// bounding rectangle around every geometry in a collection, used to fit the
/// map viewport to a service response.
///
/// # Returns
///
/// None when the collection has no geometries with extent, otherwise the
/// enclosing rectangle
pub fn feature_collection_bbox(
    collection: &FeatureCollection,
) -> Result<Option<Rect<f64>>, FeatureError> {
    let mut result: Option<Rect<f64>> = None;
    for feature in collection.features.iter() {
        let Some(geometry) = &feature.geometry else {
            continue;
        };
        let geometry = Geometry::<f64>::try_from(geometry.value.clone())?;
        if let Some(rect) = geometry.bounding_rect() {
            result = Some(match result {
                None => rect,
                Some(acc) => merge(&acc, &rect),
            });
        }
    }
    Ok(result)
}

fn merge(a: &Rect<f64>, b: &Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::feature_collection_bbox;
    use geojson::FeatureCollection;

    #[test]
    fn test_bbox_spans_all_features() {
        let fc: FeatureCollection = serde_json::from_value(serde_json::json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "LineString", "coordinates": [[4.33, 50.84], [4.36, 50.85]] }
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": { "type": "Point", "coordinates": [4.39, 50.83] }
                },
                { "type": "Feature", "properties": {}, "geometry": null }
            ]
        }))
        .unwrap();
        let rect = feature_collection_bbox(&fc).unwrap().unwrap();
        assert_eq!(rect.min().x, 4.33);
        assert_eq!(rect.min().y, 50.83);
        assert_eq!(rect.max().x, 4.39);
        assert_eq!(rect.max().y, 50.85);
    }

    #[test]
    fn test_empty_collection_has_no_bbox() {
        let fc = FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        };
        assert_eq!(feature_collection_bbox(&fc).unwrap(), None);
    }
}
