use std::collections::BTreeMap;

use linked_views::core::{CarRecord, aggregate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn aggregate_partitions_records_by_category(
        cylinders in prop::collection::vec(0u8..12, 0..200)
    ) {
        let records: Vec<CarRecord> = cylinders
            .iter()
            .map(|cyl| CarRecord::new(120.0, 22.0, f64::from(*cyl)))
            .collect();
        let counts = aggregate(&records);

        let mut expected: BTreeMap<u8, usize> = BTreeMap::new();
        for cyl in &cylinders {
            *expected.entry(*cyl).or_default() += 1;
        }

        prop_assert_eq!(counts.len(), expected.len());
        prop_assert_eq!(counts.iter().map(|entry| entry.count).sum::<usize>(), records.len());
        for (entry, (cyl, count)) in counts.iter().zip(expected.iter()) {
            prop_assert_eq!(entry.category, f64::from(*cyl));
            prop_assert_eq!(entry.count, *count);
            prop_assert!(entry.count >= 1);
        }
        prop_assert!(counts.windows(2).all(|pair| pair[0].category < pair[1].category));
    }

    #[test]
    fn aggregate_ignores_record_order(
        mut cylinders in prop::collection::vec(0u8..12, 1..100)
    ) {
        let to_records = |values: &[u8]| -> Vec<CarRecord> {
            values
                .iter()
                .map(|cyl| CarRecord::new(90.0, 30.0, f64::from(*cyl)))
                .collect()
        };
        let forward = aggregate(&to_records(&cylinders));
        cylinders.reverse();
        let backward = aggregate(&to_records(&cylinders));
        prop_assert_eq!(forward, backward);
    }
}
