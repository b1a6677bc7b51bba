//! Host-facing orchestration.
//!
//! [`LinkedViews`] owns all view state. Brush transitions, frame building and
//! snapshots are split across the submodules as `impl` blocks on it.

mod config;
mod invalidation;
mod json_contract;
mod linked_views;
mod render_coordinator;
mod render_style;
mod selection_controller;
mod snapshot;
mod validation;

pub use config::{AxisLabels, LinkedViewsConfig, OverlayClearBehavior};
pub use invalidation::SurfaceInvalidation;
pub use json_contract::{VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshotJsonContractV1};
pub use linked_views::LinkedViews;
pub use render_style::RenderStyle;
pub use selection_controller::{BrushOutcome, ReconcileChanges};
pub use snapshot::ViewSnapshot;
