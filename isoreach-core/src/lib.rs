pub mod containment;
pub mod model;
pub mod reachability;
pub mod style;
pub mod util;
