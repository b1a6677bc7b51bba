use linked_views::core::{CarRecord, CategoryCount, aggregate, max_count};

fn cars(cylinders: &[f64]) -> Vec<CarRecord> {
    cylinders
        .iter()
        .map(|cyl| CarRecord::new(100.0, 20.0, *cyl))
        .collect()
}

#[test]
fn aggregate_counts_each_category_in_ascending_order() {
    let records = cars(&[4.0, 8.0, 4.0]);
    let counts = aggregate(&records);
    assert_eq!(
        counts,
        vec![CategoryCount::new(4.0, 2), CategoryCount::new(8.0, 1)]
    );
}

#[test]
fn aggregate_sorts_categories_regardless_of_input_order() {
    let records = cars(&[8.0, 6.0, 4.0, 8.0, 3.0]);
    let categories: Vec<f64> = aggregate(&records)
        .iter()
        .map(|entry| entry.category)
        .collect();
    assert_eq!(categories, vec![3.0, 4.0, 6.0, 8.0]);
}

#[test]
fn aggregate_of_empty_input_is_empty() {
    let records: Vec<CarRecord> = Vec::new();
    assert!(aggregate(&records).is_empty());
    assert_eq!(max_count(&[]), 0);
}

#[test]
fn aggregate_never_emits_zero_counts() {
    let records = cars(&[6.0, 6.0, 6.0]);
    let counts = aggregate(&records);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0], CategoryCount::new(6.0, 3));
    assert!(counts.iter().all(|entry| entry.count > 0));
}

#[test]
fn aggregate_accepts_any_record_iterator() {
    let records = cars(&[4.0, 8.0, 4.0, 6.0]);
    let counts = aggregate(records.iter().filter(|record| record.cylinders > 4.0));
    assert_eq!(
        counts,
        vec![CategoryCount::new(6.0, 1), CategoryCount::new(8.0, 1)]
    );
}

#[test]
fn max_count_picks_tallest_bar() {
    let counts = vec![
        CategoryCount::new(4.0, 11),
        CategoryCount::new(6.0, 7),
        CategoryCount::new(8.0, 14),
    ];
    assert_eq!(max_count(&counts), 14);
}
