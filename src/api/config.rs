use serde::{Deserialize, Serialize};

use crate::core::{Margin, Viewport};
use crate::error::{ViewError, ViewResult};

use super::RenderStyle;

/// What the bar overlay shows once a selection ends without a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlayClearBehavior {
    /// Keep the last filtered aggregate on the overlay until the next brush.
    #[default]
    RetainLastSelection,
    /// Drop the overlay so only the baseline bars remain.
    RevertToBaseline,
}

/// Static axis titles for both surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabels {
    pub scatter_x: String,
    pub scatter_y: String,
    pub bar_x: String,
    pub bar_y: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            scatter_x: "Horsepower".to_owned(),
            scatter_y: "Miles per gallon".to_owned(),
            bar_x: "Cylinders".to_owned(),
            bar_y: "Number of records".to_owned(),
        }
    }
}

/// Construction parameters for [`super::LinkedViews`].
///
/// Both canvases share `viewport` and `margin`. Fields missing from JSON
/// input take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedViewsConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default = "default_point_radius_px")]
    pub point_radius_px: f64,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default)]
    pub overlay_clear_behavior: OverlayClearBehavior,
    #[serde(default)]
    pub render_style: RenderStyle,
    #[serde(default)]
    pub labels: AxisLabels,
}

impl Default for LinkedViewsConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margin: Margin::default(),
            point_radius_px: default_point_radius_px(),
            band_padding: default_band_padding(),
            tick_count: default_tick_count(),
            overlay_clear_behavior: OverlayClearBehavior::default(),
            render_style: RenderStyle::default(),
            labels: AxisLabels::default(),
        }
    }
}

impl LinkedViewsConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_point_radius_px(mut self, radius: f64) -> Self {
        self.point_radius_px = radius;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_overlay_clear_behavior(mut self, behavior: OverlayClearBehavior) -> Self {
        self.overlay_clear_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: AxisLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn validate(&self) -> ViewResult<()> {
        super::validation::validate_config(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ViewError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ViewResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ViewError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_point_radius_px() -> f64 {
    5.0
}

fn default_band_padding() -> f64 {
    0.1
}

fn default_tick_count() -> usize {
    10
}
