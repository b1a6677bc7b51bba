use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{BandScale, CategoryCount, LinearScale, RecordId, RecordStore};
use crate::interaction::{Membership, PointProjector};

/// Visual state tag shared by point and bar marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarkClass {
    #[default]
    NonBrushed,
    Brushed,
}

impl MarkClass {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::NonBrushed => "non-brushed",
            Self::Brushed => "brushed",
        }
    }
}

/// Bar identity: the exact category value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryKey(pub OrderedFloat<f64>);

impl CategoryKey {
    #[must_use]
    pub fn new(category: f64) -> Self {
        Self(OrderedFloat(category))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

/// Scatter point in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMark {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub class: MarkClass,
}

/// Bar in plot-local pixels; `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarMark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub class: MarkClass,
}

/// One point per record at `(x_scale(hp), y_scale(mpg))`.
///
/// Without a membership every point takes the default class.
#[must_use]
pub fn project_points(
    records: &RecordStore,
    projector: PointProjector,
    membership: Option<&Membership>,
    radius: f64,
) -> Vec<(RecordId, PointMark)> {
    records
        .iter()
        .map(|(id, record)| {
            let (cx, cy) = projector.project(record);
            let class = match membership {
                Some(membership) if membership.is_selected(id) => MarkClass::Brushed,
                _ => MarkClass::NonBrushed,
            };
            (
                id,
                PointMark {
                    cx,
                    cy,
                    radius,
                    class,
                },
            )
        })
        .collect()
}

/// One bar per category, rising from `plot_height` to `y_scale(count)`.
///
/// Categories outside the band domain have no slot and are skipped.
#[must_use]
pub fn project_bars(
    counts: &[CategoryCount],
    x_band: &BandScale,
    y_scale: LinearScale,
    plot_height: f64,
    class: MarkClass,
) -> Vec<(CategoryKey, BarMark)> {
    let mut bars = Vec::with_capacity(counts.len());
    for entry in counts {
        let Some(x) = x_band.position(entry.category) else {
            warn!(
                category = entry.category,
                "skipping bar for category outside band domain"
            );
            continue;
        };
        let y = y_scale.map(entry.count as f64);
        bars.push((
            CategoryKey::new(entry.category),
            BarMark {
                x,
                y,
                width: x_band.bandwidth(),
                height: plot_height - y,
                class,
            },
        ));
    }
    bars
}
