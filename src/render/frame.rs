use crate::core::Viewport;
use crate::error::{ViewError, ViewResult};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, RectPrimitive, SurfaceKind,
    SurfaceLayerStack, TextPrimitive,
};

/// Primitives of one paint layer. Backends draw rects, circles, lines, texts in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one surface draw pass, in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: SurfaceKind,
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: SurfaceKind, viewport: Viewport) -> Self {
        let layers = SurfaceLayerStack::canonical_for_surface(surface)
            .layers
            .into_iter()
            .map(LayerPrimitives::empty)
            .collect();
        Self {
            surface,
            viewport,
            layers,
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> ViewResult<&mut LayerPrimitives> {
        let surface = self.surface;
        self.layers
            .iter_mut()
            .find(|layer| layer.kind == kind)
            .ok_or_else(|| {
                ViewError::InvalidData(format!("surface {surface:?} has no {kind:?} layer"))
            })
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) -> ViewResult<()> {
        self.layer_mut(kind)?.lines.push(line);
        Ok(())
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) -> ViewResult<()> {
        self.layer_mut(kind)?.rects.push(rect);
        Ok(())
    }

    pub fn push_circle(
        &mut self,
        kind: CanvasLayerKind,
        circle: CirclePrimitive,
    ) -> ViewResult<()> {
        self.layer_mut(kind)?.circles.push(circle);
        Ok(())
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) -> ViewResult<()> {
        self.layer_mut(kind)?.texts.push(text);
        Ok(())
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.circles.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    pub fn validate(&self) -> ViewResult<()> {
        if !self.viewport.is_valid() {
            return Err(ViewError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for line in &layer.lines {
                line.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
