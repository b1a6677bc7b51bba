use serde::{Deserialize, Serialize};

use crate::core::{CategoryCount, RecordId, SelectionRegion, Viewport};
use crate::error::{ViewError, ViewResult};
use crate::interaction::BrushState;
use crate::render::Renderer;

use super::LinkedViews;

/// Serializable view state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub viewport: Viewport,
    pub record_count: usize,
    pub brush: BrushState,
    pub selected_records: Vec<RecordId>,
    pub baseline: Vec<CategoryCount>,
    pub overlay: Vec<CategoryCount>,
    pub scatter_x_domain: (f64, f64),
    pub scatter_y_domain: (f64, f64),
    pub bar_categories: Vec<f64>,
    pub bar_y_domain: (f64, f64),
}

impl<R: Renderer> LinkedViews<R> {
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            viewport: self.config.viewport,
            record_count: self.records.len(),
            brush: self.snapshot_brush_state(),
            selected_records: self.membership.selected_ids().collect(),
            baseline: self.baseline.clone(),
            overlay: self.filtered.clone(),
            scatter_x_domain: self.projector.x_scale.domain(),
            scatter_y_domain: self.projector.y_scale.domain(),
            bar_categories: self.bar_x.domain().to_vec(),
            bar_y_domain: self.bar_y.domain(),
        }
    }

    /// Brush state with non-finite regions clipped to the plot so the snapshot
    /// stays valid JSON. Every point lies inside the plot, so membership is the
    /// same for the stored region.
    fn snapshot_brush_state(&self) -> BrushState {
        match self.brush.state() {
            BrushState::Selecting { region } if !region.is_finite() => {
                let plot = self.scatter_plot_area();
                let region = region
                    .clip_to(plot.width, plot.height)
                    .unwrap_or(SelectionRegion::new(0.0, 0.0, 0.0, 0.0));
                BrushState::Selecting { region }
            }
            state => state,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ViewError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
