use serde::{Deserialize, Serialize};

/// One of the two linked drawing canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Scatter,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    /// Scatter points or baseline bars.
    Series,
    /// Filtered bars drawn over the baseline.
    Overlay,
    /// Brush rectangle.
    Selection,
    Axis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceLayerStack {
    pub surface: SurfaceKind,
    pub layers: Vec<CanvasLayerKind>,
}

impl SurfaceLayerStack {
    /// Bottom-to-top paint order for a surface.
    #[must_use]
    pub fn canonical_for_surface(surface: SurfaceKind) -> Self {
        let layers = match surface {
            SurfaceKind::Scatter => vec![
                CanvasLayerKind::Background,
                CanvasLayerKind::Series,
                CanvasLayerKind::Selection,
                CanvasLayerKind::Axis,
            ],
            SurfaceKind::Bar => vec![
                CanvasLayerKind::Background,
                CanvasLayerKind::Series,
                CanvasLayerKind::Overlay,
                CanvasLayerKind::Axis,
            ],
        };
        Self { surface, layers }
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasLayerKind, SurfaceKind, SurfaceLayerStack};

    #[test]
    fn bar_overlay_paints_above_baseline() {
        let stack = SurfaceLayerStack::canonical_for_surface(SurfaceKind::Bar);
        assert_eq!(
            stack.layers,
            vec![
                CanvasLayerKind::Background,
                CanvasLayerKind::Series,
                CanvasLayerKind::Overlay,
                CanvasLayerKind::Axis,
            ]
        );
    }

    #[test]
    fn scatter_has_selection_layer_above_points() {
        let stack = SurfaceLayerStack::canonical_for_surface(SurfaceKind::Scatter);
        let series = stack.layers.iter().position(|k| *k == CanvasLayerKind::Series);
        let selection = stack
            .layers
            .iter()
            .position(|k| *k == CanvasLayerKind::Selection);
        assert!(series < selection);
        assert!(!stack.layers.contains(&CanvasLayerKind::Overlay));
    }
}
