use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::SelectionRegion;
use crate::interaction::{BrushContext, BrushState, BrushUpdate, Membership};
use crate::render::{
    MarkClass, ReconcileSummary, Renderer, SurfaceKind, project_bars, project_points,
};

use super::{LinkedViews, OverlayClearBehavior};

/// Result of one brush transition as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushOutcome {
    pub state: BrushState,
    pub selected_count: usize,
    pub point_changes: ReconcileChanges,
    pub overlay_changes: ReconcileChanges,
}

/// Serializable mirror of [`ReconcileSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReconcileChanges {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

impl From<ReconcileSummary> for ReconcileChanges {
    fn from(summary: ReconcileSummary) -> Self {
        Self {
            entered: summary.entered,
            updated: summary.updated,
            exited: summary.exited,
        }
    }
}

impl<R: Renderer> LinkedViews<R> {
    /// Drag start with the current region, `None` when the gesture has no extent yet.
    pub fn brush_start(&mut self, region: Option<SelectionRegion>) -> BrushOutcome {
        let context = BrushContext {
            records: &self.records,
            projector: self.projector,
        };
        let update = self.brush.on_brush_start(region, context);
        self.apply_brush_update(update)
    }

    pub fn brush_move(&mut self, region: Option<SelectionRegion>) -> BrushOutcome {
        let context = BrushContext {
            records: &self.records,
            projector: self.projector,
        };
        let update = self.brush.on_brush_move(region, context);
        self.apply_brush_update(update)
    }

    pub fn brush_end(&mut self, region: Option<SelectionRegion>) -> BrushOutcome {
        let context = BrushContext {
            records: &self.records,
            projector: self.projector,
        };
        let update = self.brush.on_brush_end(region, context);
        self.apply_brush_update(update)
    }

    pub fn clear_brush(&mut self) -> BrushOutcome {
        let update = self.brush.clear();
        self.apply_brush_update(update)
    }

    /// Same as [`Self::brush_start`] with a region in canvas pixels.
    pub fn brush_start_canvas(&mut self, region: Option<SelectionRegion>) -> BrushOutcome {
        let region = self.canvas_to_plot(region);
        self.brush_start(region)
    }

    pub fn brush_move_canvas(&mut self, region: Option<SelectionRegion>) -> BrushOutcome {
        let region = self.canvas_to_plot(region);
        self.brush_move(region)
    }

    pub fn brush_end_canvas(&mut self, region: Option<SelectionRegion>) -> BrushOutcome {
        let region = self.canvas_to_plot(region);
        self.brush_end(region)
    }

    fn canvas_to_plot(&self, region: Option<SelectionRegion>) -> Option<SelectionRegion> {
        let plot = self.scatter_plot;
        region.map(|region| region.translated(-plot.left, -plot.top))
    }

    fn apply_brush_update(&mut self, update: BrushUpdate) -> BrushOutcome {
        let mut overlay_summary = ReconcileSummary::default();

        match update {
            BrushUpdate::Selected {
                membership,
                filtered,
            } => {
                self.membership = membership;
                let overlay = project_bars(
                    &filtered,
                    &self.bar_x,
                    self.bar_y,
                    self.bar_plot.height,
                    MarkClass::Brushed,
                );
                overlay_summary =
                    ReconcileSummary::from_diffs(&self.overlay_bars.reconcile(overlay));
                self.filtered = filtered;
                self.invalidation.invalidate(SurfaceKind::Bar);
            }
            BrushUpdate::Reverted => {
                self.membership = Membership::none(self.records.len());
            }
            BrushUpdate::Cleared => {
                self.membership = Membership::none(self.records.len());
                if self.config.overlay_clear_behavior == OverlayClearBehavior::RevertToBaseline {
                    overlay_summary = ReconcileSummary::from_diffs(&self.overlay_bars.clear());
                    self.filtered.clear();
                    debug!("overlay reverted to baseline");
                }
                self.invalidation.invalidate(SurfaceKind::Bar);
            }
        }

        let points = project_points(
            &self.records,
            self.projector,
            Some(&self.membership),
            self.config.point_radius_px,
        );
        let point_summary = ReconcileSummary::from_diffs(&self.points.reconcile(points));
        self.invalidation.invalidate(SurfaceKind::Scatter);

        trace!(
            restyled = point_summary.updated,
            overlay_entered = overlay_summary.entered,
            overlay_updated = overlay_summary.updated,
            overlay_exited = overlay_summary.exited,
            "brush update applied"
        );

        BrushOutcome {
            state: self.brush.state(),
            selected_count: self.membership.selected_count(),
            point_changes: point_summary.into(),
            overlay_changes: overlay_summary.into(),
        }
    }
}
