use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::{
    BandScale, CategoryCount, LinearScale, PlotArea, RecordId, RecordStore, aggregate, max_count,
};
use crate::data::{self, LoadOptions};
use crate::error::ViewResult;
use crate::interaction::{BrushController, BrushState, Membership, PointProjector};
use crate::render::{
    BarMark, CategoryKey, MarkClass, MarkLayer, PointMark, Renderer, project_bars,
    project_points,
};

use super::LinkedViewsConfig;
use super::invalidation::SurfaceInvalidation;

/// Owned view state for the scatter/bar pair.
///
/// Holds the loaded records, both surfaces' scales, the brush and the
/// persistent mark layers. It can only be built from an already loaded
/// [`RecordStore`], so nothing renders or reacts to input before the data is
/// in place.
pub struct LinkedViews<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LinkedViewsConfig,
    pub(super) records: RecordStore,
    pub(super) scatter_plot: PlotArea,
    pub(super) bar_plot: PlotArea,
    pub(super) projector: PointProjector,
    pub(super) bar_x: BandScale,
    pub(super) bar_y: LinearScale,
    pub(super) brush: BrushController,
    pub(super) membership: Membership,
    pub(super) baseline: Vec<CategoryCount>,
    pub(super) filtered: Vec<CategoryCount>,
    pub(super) points: MarkLayer<RecordId, PointMark>,
    pub(super) baseline_bars: MarkLayer<CategoryKey, BarMark>,
    pub(super) overlay_bars: MarkLayer<CategoryKey, BarMark>,
    pub(super) invalidation: SurfaceInvalidation,
}

impl<R: Renderer> LinkedViews<R> {
    /// Builds scales from the data extents and draws the initial marks.
    pub fn new(renderer: R, config: LinkedViewsConfig, records: RecordStore) -> ViewResult<Self> {
        config.validate()?;
        let scatter_plot = PlotArea::from_viewport(config.viewport, config.margin)?;
        let bar_plot = PlotArea::from_viewport(config.viewport, config.margin)?;

        let (hp_min, hp_max) = records.horsepower_extent();
        let (mpg_min, mpg_max) = records.mpg_extent();
        let projector = PointProjector::new(
            LinearScale::new(hp_min, hp_max, 0.0, scatter_plot.width)?,
            LinearScale::new(mpg_min, mpg_max, scatter_plot.height, 0.0)?,
        );

        let baseline = aggregate(records.records());
        let bar_x = BandScale::new(
            baseline.iter().map(|entry| entry.category),
            0.0,
            bar_plot.width,
            config.band_padding,
        )?;
        let bar_y = LinearScale::new(0.0, max_count(&baseline) as f64, bar_plot.height, 0.0)?;

        let mut points = MarkLayer::new();
        points.reconcile(project_points(
            &records,
            projector,
            None,
            config.point_radius_px,
        ));
        let mut baseline_bars = MarkLayer::new();
        baseline_bars.reconcile(project_bars(
            &baseline,
            &bar_x,
            bar_y,
            bar_plot.height,
            MarkClass::NonBrushed,
        ));

        debug!(
            records = records.len(),
            categories = baseline.len(),
            hp_domain = ?(hp_min, hp_max),
            mpg_domain = ?(mpg_min, mpg_max),
            "linked views initialized"
        );

        let membership = Membership::none(records.len());
        Ok(Self {
            renderer,
            config,
            records,
            scatter_plot,
            bar_plot,
            projector,
            bar_x,
            bar_y,
            brush: BrushController::default(),
            membership,
            baseline,
            filtered: Vec::new(),
            points,
            baseline_bars,
            overlay_bars: MarkLayer::new(),
            invalidation: SurfaceInvalidation::all(),
        })
    }

    /// Loads a dataset from `path` and builds the views in one step.
    pub fn from_path(
        renderer: R,
        config: LinkedViewsConfig,
        path: impl AsRef<Path>,
        options: LoadOptions,
    ) -> ViewResult<Self> {
        let records = data::load_path(path, options)?;
        Self::new(renderer, config, records)
    }

    pub fn from_reader<I: Read>(
        renderer: R,
        config: LinkedViewsConfig,
        input: I,
        options: LoadOptions,
    ) -> ViewResult<Self> {
        let records = data::load_reader(input, options)?;
        Self::new(renderer, config, records)
    }

    #[must_use]
    pub fn config(&self) -> &LinkedViewsConfig {
        &self.config
    }

    #[must_use]
    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    #[must_use]
    pub fn scatter_plot_area(&self) -> PlotArea {
        self.scatter_plot
    }

    #[must_use]
    pub fn bar_plot_area(&self) -> PlotArea {
        self.bar_plot
    }

    #[must_use]
    pub fn projector(&self) -> PointProjector {
        self.projector
    }

    #[must_use]
    pub fn bar_x_scale(&self) -> &BandScale {
        &self.bar_x
    }

    #[must_use]
    pub fn bar_y_scale(&self) -> LinearScale {
        self.bar_y
    }

    #[must_use]
    pub fn brush_state(&self) -> BrushState {
        self.brush.state()
    }

    #[must_use]
    pub fn membership(&self) -> &Membership {
        &self.membership
    }

    /// Full-dataset aggregate drawn on the baseline layer.
    #[must_use]
    pub fn baseline_counts(&self) -> &[CategoryCount] {
        &self.baseline
    }

    /// Aggregate currently drawn on the overlay layer.
    #[must_use]
    pub fn overlay_counts(&self) -> &[CategoryCount] {
        &self.filtered
    }

    #[must_use]
    pub fn point_marks(&self) -> &MarkLayer<RecordId, PointMark> {
        &self.points
    }

    #[must_use]
    pub fn point_class(&self, id: RecordId) -> Option<MarkClass> {
        self.points.get(&id).map(|mark| mark.class)
    }

    #[must_use]
    pub fn baseline_bar_marks(&self) -> &MarkLayer<CategoryKey, BarMark> {
        &self.baseline_bars
    }

    #[must_use]
    pub fn overlay_bar_marks(&self) -> &MarkLayer<CategoryKey, BarMark> {
        &self.overlay_bars
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
