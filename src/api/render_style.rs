use serde::{Deserialize, Serialize};

use crate::render::{AxisStyle, Color, MarkClass};

/// Colors and strokes for both surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background_color: Color,
    pub point_color: Color,
    pub point_brushed_color: Color,
    pub bar_baseline_color: Color,
    pub bar_overlay_color: Color,
    pub selection_fill_color: Color,
    pub selection_border_color: Color,
    pub selection_border_width: f64,
    pub axis: AxisStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(1.0, 1.0, 1.0),
            point_color: Color::rgba(0.55, 0.55, 0.55, 0.7),
            point_brushed_color: Color::rgb(0.275, 0.51, 0.706),
            bar_baseline_color: Color::rgb(0.8, 0.8, 0.8),
            bar_overlay_color: Color::rgb(0.275, 0.51, 0.706),
            selection_fill_color: Color::rgba(0.47, 0.47, 0.47, 0.3),
            selection_border_color: Color::rgb(1.0, 1.0, 1.0),
            selection_border_width: 1.0,
            axis: AxisStyle::default(),
        }
    }
}

impl RenderStyle {
    #[must_use]
    pub fn point_fill(&self, class: MarkClass) -> Color {
        match class {
            MarkClass::NonBrushed => self.point_color,
            MarkClass::Brushed => self.point_brushed_color,
        }
    }

    #[must_use]
    pub fn bar_fill(&self, class: MarkClass) -> Color {
        match class {
            MarkClass::NonBrushed => self.bar_baseline_color,
            MarkClass::Brushed => self.bar_overlay_color,
        }
    }
}
