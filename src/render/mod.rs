mod axis;
mod frame;
mod layer_stack;
mod marks;
mod null_renderer;
mod primitives;
mod reconcile;
mod svg_backend;

pub use axis::{
    AXIS_LABEL_OFFSET_PX, AXIS_TICK_PADDING_PX, AXIS_TICK_SIZE_PX, AxisOrientation, AxisSpec,
    AxisStyle, AxisTick, band_axis_ticks, linear_axis_ticks, push_axis,
};
pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::{CanvasLayerKind, SurfaceKind, SurfaceLayerStack};
pub use marks::{BarMark, CategoryKey, MarkClass, PointMark, project_bars, project_points};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};
pub use reconcile::{MarkDiff, MarkLayer, ReconcileSummary};
pub use svg_backend::{SvgRenderStats, SvgRenderer};

use crate::error::ViewResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` per surface so drawing
/// code stays isolated from brushing and aggregation logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewResult<()>;
}
