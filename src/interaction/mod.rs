//! Brush state machine.
//!
//! The controller owns the selection region. Each transition re-derives
//! membership and the filtered aggregate from the full record set and hands
//! the result back as a [`BrushUpdate`]; applying it to marks is the caller's
//! job.

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    CarRecord, CategoryCount, LinearScale, RecordId, RecordStore, SelectionRegion, aggregate,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BrushState {
    Idle,
    Selecting { region: SelectionRegion },
}

/// Maps records to plot-local pixel positions, shared with the scatter marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointProjector {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl PointProjector {
    #[must_use]
    pub fn new(x_scale: LinearScale, y_scale: LinearScale) -> Self {
        Self { x_scale, y_scale }
    }

    #[must_use]
    pub fn project(self, record: &CarRecord) -> (f64, f64) {
        (
            self.x_scale.map(record.horsepower),
            self.y_scale.map(record.mpg),
        )
    }
}

/// Per-record inside/outside flags for one selection region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Membership {
    selected: Vec<bool>,
}

impl Membership {
    /// Membership with every record outside.
    #[must_use]
    pub fn none(len: usize) -> Self {
        Self {
            selected: vec![false; len],
        }
    }

    #[must_use]
    pub fn from_region(
        records: &RecordStore,
        projector: PointProjector,
        region: SelectionRegion,
    ) -> Self {
        if region.is_degenerate() {
            return Self::none(records.len());
        }

        let inside = |record: &CarRecord| {
            let (x, y) = projector.project(record);
            region.contains(x, y)
        };

        #[cfg(feature = "parallel-projection")]
        let selected = records.records().par_iter().map(inside).collect();

        #[cfg(not(feature = "parallel-projection"))]
        let selected = records.records().iter().map(inside).collect();

        Self { selected }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.get(id.0).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|flag| **flag).count()
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag)
            .map(|(index, _)| RecordId(index))
    }

    /// Records flagged as inside, in store order.
    pub fn filter<'a>(&'a self, records: &'a RecordStore) -> impl Iterator<Item = &'a CarRecord> {
        records
            .iter()
            .filter(|(id, _)| self.is_selected(*id))
            .map(|(_, record)| record)
    }
}

/// What a transition asks the view to redraw.
#[derive(Debug, Clone, PartialEq)]
pub enum BrushUpdate {
    /// A region is active: restyle points from `membership` and draw `filtered` on the overlay.
    Selected {
        membership: Membership,
        filtered: Vec<CategoryCount>,
    },
    /// Gesture reported no region: points revert to default, overlay untouched.
    Reverted,
    /// Selection ended or was cleared.
    Cleared,
}

/// Inputs a transition reads. Borrowed per call so the controller holds no data.
#[derive(Debug, Clone, Copy)]
pub struct BrushContext<'a> {
    pub records: &'a RecordStore,
    pub projector: PointProjector,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushController {
    state: BrushState,
}

impl Default for BrushController {
    fn default() -> Self {
        Self {
            state: BrushState::Idle,
        }
    }
}

impl BrushController {
    #[must_use]
    pub fn state(self) -> BrushState {
        self.state
    }

    #[must_use]
    pub fn region(self) -> Option<SelectionRegion> {
        match self.state {
            BrushState::Idle => None,
            BrushState::Selecting { region } => Some(region),
        }
    }

    #[must_use]
    pub fn is_selecting(self) -> bool {
        matches!(self.state, BrushState::Selecting { .. })
    }

    pub fn on_brush_start(
        &mut self,
        region: Option<SelectionRegion>,
        context: BrushContext<'_>,
    ) -> BrushUpdate {
        debug!(?region, "brush start");
        self.select_or_revert(region, context)
    }

    pub fn on_brush_move(
        &mut self,
        region: Option<SelectionRegion>,
        context: BrushContext<'_>,
    ) -> BrushUpdate {
        trace!(?region, "brush move");
        self.select_or_revert(region, context)
    }

    /// Releasing with a region keeps it active; releasing without one clears.
    pub fn on_brush_end(
        &mut self,
        region: Option<SelectionRegion>,
        context: BrushContext<'_>,
    ) -> BrushUpdate {
        debug!(?region, "brush end");
        match region {
            Some(region) => self.select(region, context),
            None => self.clear(),
        }
    }

    pub fn clear(&mut self) -> BrushUpdate {
        if self.is_selecting() {
            debug!("brush cleared");
        }
        self.state = BrushState::Idle;
        BrushUpdate::Cleared
    }

    fn select_or_revert(
        &mut self,
        region: Option<SelectionRegion>,
        context: BrushContext<'_>,
    ) -> BrushUpdate {
        match region {
            Some(region) => self.select(region, context),
            None => {
                self.state = BrushState::Idle;
                BrushUpdate::Reverted
            }
        }
    }

    fn select(&mut self, region: SelectionRegion, context: BrushContext<'_>) -> BrushUpdate {
        self.state = BrushState::Selecting { region };

        let membership = Membership::from_region(context.records, context.projector, region);
        let filtered = aggregate(membership.filter(context.records));
        trace!(
            selected = membership.selected_count(),
            categories = filtered.len(),
            degenerate = region.is_degenerate(),
            "brush membership recomputed"
        );

        BrushUpdate::Selected {
            membership,
            filtered,
        }
    }
}
