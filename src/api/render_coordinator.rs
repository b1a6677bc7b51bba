use tracing::trace;

use crate::error::ViewResult;
use crate::render::{
    AxisOrientation, AxisSpec, CanvasLayerKind, CirclePrimitive, RectPrimitive, RenderFrame,
    Renderer, SurfaceKind, band_axis_ticks, linear_axis_ticks, push_axis,
};

use super::LinkedViews;
use super::invalidation::SurfaceInvalidation;

impl<R: Renderer> LinkedViews<R> {
    /// Materializes the scatter surface: points, brush rectangle and both axes.
    pub fn build_scatter_frame(&self) -> ViewResult<RenderFrame> {
        let plot = self.scatter_plot;
        let style = &self.config.render_style;
        let mut frame = RenderFrame::new(SurfaceKind::Scatter, self.config.viewport);
        self.push_background(&mut frame)?;

        for mark in self.points.marks() {
            frame.push_circle(
                CanvasLayerKind::Series,
                CirclePrimitive::new(
                    plot.left + mark.cx,
                    plot.top + mark.cy,
                    mark.radius,
                    style.point_fill(mark.class),
                )
                .with_class(mark.class.css_class()),
            )?;
        }

        // Unbounded sides are drawn up to the plot edge.
        let drawn_region = self.brush.region().and_then(|region| {
            if region.is_finite() {
                (!region.is_degenerate()).then_some(region)
            } else {
                region.clip_to(plot.width, plot.height)
            }
        });
        if let Some(region) = drawn_region {
            frame.push_rect(
                CanvasLayerKind::Selection,
                RectPrimitive::new(
                    plot.left + region.x_min,
                    plot.top + region.y_min,
                    region.width(),
                    region.height(),
                    style.selection_fill_color,
                )
                .with_border(style.selection_border_width, style.selection_border_color),
            )?;
        }

        let x_scale = self.projector.x_scale;
        let y_scale = self.projector.y_scale;
        let x_ticks = linear_axis_ticks(x_scale, self.config.tick_count);
        let y_ticks = linear_axis_ticks(y_scale, self.config.tick_count);
        push_axis(
            &mut frame,
            plot,
            &AxisSpec {
                orientation: AxisOrientation::Bottom,
                range: x_scale.range(),
                ticks: &x_ticks,
                label: &self.config.labels.scatter_x,
            },
            style.axis,
        )?;
        push_axis(
            &mut frame,
            plot,
            &AxisSpec {
                orientation: AxisOrientation::Left,
                range: y_scale.range(),
                ticks: &y_ticks,
                label: &self.config.labels.scatter_y,
            },
            style.axis,
        )?;

        Ok(frame)
    }

    /// Materializes the bar surface: baseline bars, overlay bars and both axes.
    pub fn build_bar_frame(&self) -> ViewResult<RenderFrame> {
        let plot = self.bar_plot;
        let style = &self.config.render_style;
        let mut frame = RenderFrame::new(SurfaceKind::Bar, self.config.viewport);
        self.push_background(&mut frame)?;

        for (layer, marks) in [
            (CanvasLayerKind::Series, &self.baseline_bars),
            (CanvasLayerKind::Overlay, &self.overlay_bars),
        ] {
            for bar in marks.marks() {
                frame.push_rect(
                    layer,
                    RectPrimitive::new(
                        plot.left + bar.x,
                        plot.top + bar.y,
                        bar.width,
                        bar.height,
                        style.bar_fill(bar.class),
                    )
                    .with_class(bar.class.css_class()),
                )?;
            }
        }

        let x_ticks = band_axis_ticks(&self.bar_x);
        let y_ticks = linear_axis_ticks(self.bar_y, self.config.tick_count);
        push_axis(
            &mut frame,
            plot,
            &AxisSpec {
                orientation: AxisOrientation::Bottom,
                range: self.bar_x.range(),
                ticks: &x_ticks,
                label: &self.config.labels.bar_x,
            },
            style.axis,
        )?;
        push_axis(
            &mut frame,
            plot,
            &AxisSpec {
                orientation: AxisOrientation::Left,
                range: self.bar_y.range(),
                ticks: &y_ticks,
                label: &self.config.labels.bar_y,
            },
            style.axis,
        )?;

        Ok(frame)
    }

    pub fn build_frame(&self, surface: SurfaceKind) -> ViewResult<RenderFrame> {
        match surface {
            SurfaceKind::Scatter => self.build_scatter_frame(),
            SurfaceKind::Bar => self.build_bar_frame(),
        }
    }

    /// Renders only the surfaces whose marks changed since the last pass.
    ///
    /// Returns how many frames were sent to the renderer.
    pub fn render(&mut self) -> ViewResult<usize> {
        let pending = self.invalidation.take();
        let mut rendered = 0;
        let surfaces = [SurfaceKind::Scatter, SurfaceKind::Bar];
        for (index, surface) in surfaces.into_iter().enumerate() {
            if !pending.is_invalidated(surface) {
                continue;
            }
            if let Err(err) = self.render_surface(surface) {
                // Surfaces not drawn in this pass stay pending.
                for &remaining in &surfaces[index..] {
                    if pending.is_invalidated(remaining) {
                        self.invalidation.invalidate(remaining);
                    }
                }
                return Err(err);
            }
            rendered += 1;
        }
        trace!(rendered, "render pass finished");
        Ok(rendered)
    }

    /// Renders both surfaces regardless of pending invalidation.
    pub fn render_all(&mut self) -> ViewResult<()> {
        self.invalidation = SurfaceInvalidation::all();
        self.render().map(|_| ())
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        !self.invalidation.is_clean()
    }

    fn render_surface(&mut self, surface: SurfaceKind) -> ViewResult<()> {
        let frame = self.build_frame(surface)?;
        self.renderer.render(&frame)
    }

    fn push_background(&self, frame: &mut RenderFrame) -> ViewResult<()> {
        let viewport = frame.viewport;
        frame.push_rect(
            CanvasLayerKind::Background,
            RectPrimitive::new(
                0.0,
                0.0,
                f64::from(viewport.width),
                f64::from(viewport.height),
                self.config.render_style.background_color,
            ),
        )
    }
}
