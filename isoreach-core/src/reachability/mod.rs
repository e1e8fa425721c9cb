mod aggregator;
mod range_filter;
mod reachability_aggregation;
mod reachability_error;

pub use aggregator::aggregate;
pub use range_filter::RangeFilter;
pub use reachability_aggregation::{ReachabilityAggregation, TRAVEL_TIME_PROPERTY};
pub use reachability_error::ReachabilityError;
