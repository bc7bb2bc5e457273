//! Query engine.
//!
//! Runs a predicate over a record store. Filtering is stable and never
//! touches the store; results borrow the surviving records.

use tracing::debug;

use super::predicate::Predicate;
use super::types::GatherResult;

/// Collect the records accepted by `predicate`, in store order.
pub fn gather<'a, R: 'static>(records: &'a [R], predicate: &Predicate<R>) -> GatherResult<'a, R> {
    let items: Vec<&R> = if predicate.is_identity() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|record| predicate.matches(record))
            .collect()
    };

    debug!(
        filters = ?predicate.filter_names(),
        matched = items.len(),
        total = records.len(),
        "gather executed"
    );

    GatherResult::new(items, records.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::gather::predicate::RecordFilter;

    struct Even;

    impl RecordFilter<u32> for Even {
        fn name(&self) -> &str {
            "even"
        }

        fn matches(&self, record: &u32) -> bool {
            record % 2 == 0
        }
    }

    struct Below(u32);

    impl RecordFilter<u32> for Below {
        fn name(&self) -> &str {
            "below"
        }

        fn matches(&self, record: &u32) -> bool {
            *record < self.0
        }
    }

    #[test]
    fn identity_returns_full_store_in_order() {
        let store = [5u32, 3, 8, 1];
        let result = gather(&store, &Predicate::new());

        assert_eq!(result.items, [&5u32, &3, &8, &1]);
        assert_eq!(result.total, 4);
    }

    #[test]
    fn filtering_is_stable() {
        let store = [10u32, 7, 4, 2, 9, 6];
        let result = gather(&store, &Predicate::new().add(Even));

        assert_eq!(result.items, [&10u32, &4, &2, &6]);
    }

    #[test]
    fn filters_are_anded() {
        let store = [10u32, 7, 4, 2, 9, 6];
        let result = gather(&store, &Predicate::new().add(Even).add(Below(5)));

        assert_eq!(result.items, [&4u32, &2]);
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let store = [1u32, 3, 5];
        let result = gather(&store, &Predicate::new().add(Even));

        assert!(result.is_empty());
        assert_eq!(result.total, 3);
        assert_eq!(store, [1u32, 3, 5]);
    }
}
