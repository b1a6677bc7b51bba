use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, PlotArea, format_tick};
use crate::error::ViewResult;
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

pub const AXIS_TICK_SIZE_PX: f64 = 6.0;
pub const AXIS_TICK_PADDING_PX: f64 = 3.0;
pub const AXIS_LABEL_OFFSET_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub color: Color,
    pub stroke_width: f64,
    pub tick_font_size_px: f64,
    pub label_font_size_px: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0.0, 0.0, 0.0),
            stroke_width: 1.0,
            tick_font_size_px: 10.0,
            label_font_size_px: 12.0,
        }
    }
}

/// Tick position along the axis in plot-local pixels, with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[must_use]
pub fn linear_axis_ticks(scale: LinearScale, count: usize) -> Vec<AxisTick> {
    let step = scale.tick_step(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            position: scale.map(value),
            label: format_tick(value, step),
        })
        .collect()
}

/// One tick per category at the band centre.
#[must_use]
pub fn band_axis_ticks(scale: &BandScale) -> Vec<AxisTick> {
    scale
        .domain()
        .iter()
        .filter_map(|category| {
            scale.center(*category).map(|position| AxisTick {
                position,
                label: category.to_string(),
            })
        })
        .collect()
}

/// Everything needed to draw one axis next to a plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec<'a> {
    pub orientation: AxisOrientation,
    /// Plot-local extent of the domain line.
    pub range: (f64, f64),
    pub ticks: &'a [AxisTick],
    pub label: &'a str,
}

/// Pushes the domain line, ticks, tick labels and the axis title onto the axis layer.
///
/// The bottom axis hangs below the plot with its title centred 40px under the
/// line; the left axis title is rotated and sits 40px left of the line at two
/// fifths of the plot height.
pub fn push_axis(
    frame: &mut RenderFrame,
    plot: PlotArea,
    axis: &AxisSpec<'_>,
    style: AxisStyle,
) -> ViewResult<()> {
    let layer = CanvasLayerKind::Axis;
    let (range_start, range_end) = axis.range;

    match axis.orientation {
        AxisOrientation::Bottom => {
            let origin_x = plot.left;
            let origin_y = plot.top + plot.height;
            frame.push_line(
                layer,
                LinePrimitive::new(
                    origin_x + range_start,
                    origin_y,
                    origin_x + range_end,
                    origin_y,
                    style.stroke_width,
                    style.color,
                ),
            )?;
            for tick in axis.ticks {
                let x = origin_x + tick.position;
                frame.push_line(
                    layer,
                    LinePrimitive::new(
                        x,
                        origin_y,
                        x,
                        origin_y + AXIS_TICK_SIZE_PX,
                        style.stroke_width,
                        style.color,
                    ),
                )?;
                frame.push_text(
                    layer,
                    TextPrimitive::new(
                        tick.label.clone(),
                        x,
                        origin_y + AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX,
                        style.tick_font_size_px,
                        style.color,
                        TextHAlign::Center,
                    )
                    .with_v_align(TextVAlign::Top),
                )?;
            }
            frame.push_text(
                layer,
                TextPrimitive::new(
                    axis.label,
                    origin_x + plot.width / 2.0,
                    origin_y + AXIS_LABEL_OFFSET_PX,
                    style.label_font_size_px,
                    style.color,
                    TextHAlign::Center,
                ),
            )?;
        }
        AxisOrientation::Left => {
            let origin_x = plot.left;
            let origin_y = plot.top;
            frame.push_line(
                layer,
                LinePrimitive::new(
                    origin_x,
                    origin_y + range_start,
                    origin_x,
                    origin_y + range_end,
                    style.stroke_width,
                    style.color,
                ),
            )?;
            for tick in axis.ticks {
                let y = origin_y + tick.position;
                frame.push_line(
                    layer,
                    LinePrimitive::new(
                        origin_x - AXIS_TICK_SIZE_PX,
                        y,
                        origin_x,
                        y,
                        style.stroke_width,
                        style.color,
                    ),
                )?;
                frame.push_text(
                    layer,
                    TextPrimitive::new(
                        tick.label.clone(),
                        origin_x - AXIS_TICK_SIZE_PX - AXIS_TICK_PADDING_PX,
                        y,
                        style.tick_font_size_px,
                        style.color,
                        TextHAlign::Right,
                    )
                    .with_v_align(TextVAlign::Middle),
                )?;
            }
            frame.push_text(
                layer,
                TextPrimitive::new(
                    axis.label,
                    origin_x - AXIS_LABEL_OFFSET_PX,
                    origin_y + 2.0 * plot.height / 5.0,
                    style.label_font_size_px,
                    style.color,
                    TextHAlign::Center,
                )
                .with_rotation(-90.0),
            )?;
        }
    }

    Ok(())
}
