//! linked-views: headless brushing engine for a scatterplot linked to a bar chart.
//!
//! A rectangular brush over the horsepower/mpg scatterplot filters the record
//! set, re-aggregates record counts per cylinder category and redraws the bar
//! overlay. Rendering goes through backend-agnostic frames so the same state
//! can feed the bundled SVG backend or any other `Renderer`.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LinkedViews, LinkedViewsConfig};
pub use error::{LoadError, ViewError, ViewResult};
