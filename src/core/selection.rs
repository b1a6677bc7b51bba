use serde::{Deserialize, Serialize};

/// Rectangular brush extent in plot-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRegion {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl SelectionRegion {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Builds a region from two drag corners in any order.
    #[must_use]
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(x0.min(x1), x0.max(x1), y0.min(y1), y0.max(y1))
    }

    /// Zero-area, inverted or NaN-bounded regions select nothing.
    ///
    /// Infinite bounds are valid and leave that side unbounded.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        let ordered = |min: f64, max: f64| min < max;
        !(ordered(self.x_min, self.x_max) && ordered(self.y_min, self.y_max))
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }

    /// Intersection with `[0, width] x [0, height]`, `None` when nothing is left.
    #[must_use]
    pub fn clip_to(self, width: f64, height: f64) -> Option<Self> {
        if self.is_degenerate() {
            return None;
        }
        let clipped = Self::new(
            self.x_min.max(0.0),
            self.x_max.min(width),
            self.y_min.max(0.0),
            self.y_max.min(height),
        );
        (!clipped.is_degenerate()).then_some(clipped)
    }

    /// Inclusive bounds test.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        !self.is_degenerate()
            && self.x_min <= x
            && x <= self.x_max
            && self.y_min <= y
            && y <= self.y_max
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.x_min + dx,
            self.x_max + dx,
            self.y_min + dy,
            self.y_max + dy,
        )
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }
}
