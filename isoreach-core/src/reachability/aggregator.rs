use std::collections::HashMap;

use crate::model::{Point, TravelRecord};

use super::{ReachabilityAggregation, ReachabilityError};

/// combines the per-source travel times of a reachability response into the
/// fastest travel time for each target.
///
/// records with a travel time of -1 (no path) contribute nothing, and records
/// for identifiers missing from `targets` are logged and skipped. targets that
/// no record reaches are assigned `unreachable_sentinel`.
///
/// # Arguments
///
/// * `targets` - target locations, identifiers must be unique
/// * `records` - (target, travel time) pairs from every source, in any order
/// * `unreachable_sentinel` - value assigned to unreached targets. callers pick
///   something larger than any real travel time, such as the max edge weight + 1.
///
/// # Returns
///
/// exactly one travel time per target, or an error if the inputs are malformed
pub fn aggregate(
    targets: &[Point],
    records: &[TravelRecord],
    unreachable_sentinel: i64,
) -> Result<ReachabilityAggregation, ReachabilityError> {
    if unreachable_sentinel < 0 {
        return Err(ReachabilityError::InvalidSentinel(unreachable_sentinel));
    }

    let mut fastest: HashMap<&str, Option<i64>> = HashMap::with_capacity(targets.len());
    for target in targets {
        if fastest.insert(target.id.as_str(), None).is_some() {
            return Err(ReachabilityError::DuplicateTarget(target.id.clone()));
        }
    }

    let mut unmatched = 0;
    for record in records {
        match fastest.get_mut(record.id.as_str()) {
            None => {
                log::warn!("travel record for unknown target '{}', skipping", record.id);
                unmatched += 1;
            }
            Some(_) if !record.is_reachable() => {}
            Some(slot) => {
                let time = match *slot {
                    Some(current) => current.min(record.travel_time),
                    None => record.travel_time,
                };
                *slot = Some(time);
            }
        }
    }

    let travel_times = fastest
        .into_iter()
        .map(|(id, time)| (id.to_string(), time.unwrap_or(unreachable_sentinel)))
        .collect::<HashMap<_, _>>();
    log::debug!(
        "aggregated {} records onto {} targets ({} unmatched records)",
        records.len(),
        travel_times.len(),
        unmatched
    );

    Ok(ReachabilityAggregation::new(travel_times, unreachable_sentinel))
}

#[cfg(test)]
mod tests {
    use super::aggregate;
    use crate::{
        model::{Point, TravelRecord},
        reachability::ReachabilityError,
    };

    fn targets(ids: &[&str]) -> Vec<Point> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Point::new(*id, i as f64, i as f64))
            .collect()
    }

    #[test]
    fn test_minimum_with_unknown_target() {
        let targets = targets(&["a", "b"]);
        let records = vec![
            TravelRecord::new("a", 500),
            TravelRecord::new("a", 300),
            TravelRecord::new("c", 100),
        ];
        let result = aggregate(&targets, &records, 1801).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("a"), Some(300));
        assert_eq!(result.get("b"), Some(1801));
        assert_eq!(result.get("c"), None);
    }

    #[test]
    fn test_no_path_record_does_not_lower_minimum() {
        let targets = targets(&["a", "b"]);
        let records = vec![
            TravelRecord::new("b", -1),
            TravelRecord::new("a", 120),
            TravelRecord::new("a", -1),
        ];
        let result = aggregate(&targets, &records, 1801).unwrap();
        assert_eq!(result.get("a"), Some(120));
        assert_eq!(result.get("b"), Some(1801));
    }

    #[test]
    fn test_every_target_appears_once() {
        let targets = targets(&["a", "b", "c", "d"]);
        let records = vec![TravelRecord::new("d", 60), TravelRecord::new("x", 1)];
        let result = aggregate(&targets, &records, 901).unwrap();
        assert_eq!(result.len(), targets.len());
        for t in targets.iter() {
            assert!(result.get(&t.id).is_some(), "missing target {}", t.id);
        }
    }

    #[test]
    fn test_duplicated_records_are_idempotent() {
        let targets = targets(&["a", "b", "c"]);
        let records = vec![
            TravelRecord::new("a", 400),
            TravelRecord::new("b", -1),
            TravelRecord::new("c", 90),
            TravelRecord::new("a", 200),
        ];
        let doubled = records
            .iter()
            .chain(records.iter())
            .cloned()
            .collect::<Vec<_>>();
        let once = aggregate(&targets, &records, 1801).unwrap();
        let twice = aggregate(&targets, &doubled, 1801).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_record_order_does_not_matter() {
        let targets = targets(&["a", "b"]);
        let mut records = vec![
            TravelRecord::new("a", 700),
            TravelRecord::new("b", 50),
            TravelRecord::new("a", 10),
            TravelRecord::new("b", 900),
        ];
        let forward = aggregate(&targets, &records, 1801).unwrap();
        records.reverse();
        let backward = aggregate(&targets, &records, 1801).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_smaller_record_never_increases_result() {
        let targets = targets(&["a", "b"]);
        let mut records = vec![TravelRecord::new("a", 600), TravelRecord::new("b", 300)];
        let before = aggregate(&targets, &records, 1801).unwrap();
        for time in [0, 299, 300, 301, 1800] {
            records.push(TravelRecord::new("b", time));
            let after = aggregate(&targets, &records, 1801).unwrap();
            assert!(after.get("b").unwrap() <= before.get("b").unwrap());
            assert_eq!(after.get("a"), before.get("a"));
        }
    }

    #[test]
    fn test_unreferenced_target_gets_exact_sentinel() {
        let targets = targets(&["lonely"]);
        let result = aggregate(&targets, &[], 12345).unwrap();
        assert_eq!(result.get("lonely"), Some(12345));
        assert!(!result.is_reached("lonely"));
    }

    #[test]
    fn test_empty_targets_yield_empty_result() {
        let result = aggregate(&[], &[TravelRecord::new("a", 1)], 1801).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_duplicate_target_is_malformed() {
        let targets = targets(&["a", "b", "a"]);
        let result = aggregate(&targets, &[], 1801);
        assert_eq!(
            result,
            Err(ReachabilityError::DuplicateTarget(String::from("a")))
        );
    }

    #[test]
    fn test_negative_sentinel_is_rejected() {
        let targets = targets(&["a"]);
        let result = aggregate(&targets, &[], -1);
        assert_eq!(result, Err(ReachabilityError::InvalidSentinel(-1)));
    }
}
