mod feature_error;
mod identifier;
mod intersection_mode;
mod point;
mod travel_record;
mod travel_type;

pub use feature_error::FeatureError;
pub use identifier::deserialize_identifier;
pub use intersection_mode::IntersectionMode;
pub use point::{points_from_collection, Point, ID_PROPERTY};
pub use travel_record::{TravelRecord, UNREACHABLE};
pub use travel_type::TravelType;
