use crate::error::{ViewError, ViewResult};

use super::{LinkedViewsConfig, RenderStyle};

/// Upper bound on requested axis ticks.
pub const MAX_TICK_COUNT: usize = 1000;

pub(super) fn validate_render_style(style: RenderStyle) -> ViewResult<()> {
    for color in [
        style.background_color,
        style.point_color,
        style.point_brushed_color,
        style.bar_baseline_color,
        style.bar_overlay_color,
        style.selection_fill_color,
        style.selection_border_color,
        style.axis.color,
    ] {
        color.validate()?;
    }
    let border_width = style.selection_border_width;
    if !border_width.is_finite() || border_width < 0.0 {
        return Err(ViewError::InvalidData(
            "selection border width must be finite and >= 0".to_owned(),
        ));
    }
    // Axis strokes become line primitives, which reject zero widths.
    for (name, value) in [
        ("axis stroke width", style.axis.stroke_width),
        ("axis tick font size", style.axis.tick_font_size_px),
        ("axis label font size", style.axis.label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ViewError::InvalidData(format!("{name} must be finite and > 0")));
        }
    }
    Ok(())
}

pub(super) fn validate_config(config: &LinkedViewsConfig) -> ViewResult<()> {
    if !config.point_radius_px.is_finite() || config.point_radius_px <= 0.0 {
        return Err(ViewError::InvalidData("point radius must be finite and > 0".to_owned()));
    }
    if !config.band_padding.is_finite() || !(0.0..1.0).contains(&config.band_padding) {
        return Err(ViewError::InvalidData("band padding must be finite and in [0, 1)".to_owned()));
    }
    if !(1..=MAX_TICK_COUNT).contains(&config.tick_count) {
        return Err(ViewError::InvalidData(format!("tick count must be in 1..={MAX_TICK_COUNT}")));
    }
    for label in [
        &config.labels.scatter_x,
        &config.labels.scatter_y,
        &config.labels.bar_x,
        &config.labels.bar_y,
    ] {
        if label.trim().is_empty() {
            return Err(ViewError::InvalidData("axis labels must not be empty".to_owned()));
        }
    }
    validate_render_style(config.render_style)
}
