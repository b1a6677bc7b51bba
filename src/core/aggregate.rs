use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::CarRecord;

/// Number of records sharing one cylinder value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: f64,
    pub count: usize,
}

impl CategoryCount {
    #[must_use]
    pub const fn new(category: f64, count: usize) -> Self {
        Self { category, count }
    }
}

/// Counts records per distinct `cylinders` value.
///
/// Output is ascending by category with exactly one entry per category that
/// occurs in `records`. Categories with no records are absent rather than
/// reported with a zero count.
#[must_use]
pub fn aggregate<'a, I>(records: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a CarRecord>,
{
    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(OrderedFloat(record.cylinders)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount::new(category.into_inner(), count))
        .collect()
}

/// Largest count in an aggregate, `0` when empty.
#[must_use]
pub fn max_count(counts: &[CategoryCount]) -> usize {
    counts.iter().map(|entry| entry.count).max().unwrap_or(0)
}
