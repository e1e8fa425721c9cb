mod polygon_containment;

pub use polygon_containment::{mark_containment, polygons_from_collection, CONTAINED_PROPERTY};
