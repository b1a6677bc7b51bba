use serde::{Deserialize, Serialize};

use crate::render::SurfaceKind;

/// Surfaces whose marks changed since the last render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurfaceInvalidation {
    pub scatter: bool,
    pub bar: bool,
}

impl SurfaceInvalidation {
    #[must_use]
    pub fn all() -> Self {
        Self {
            scatter: true,
            bar: true,
        }
    }

    pub fn invalidate(&mut self, surface: SurfaceKind) {
        match surface {
            SurfaceKind::Scatter => self.scatter = true,
            SurfaceKind::Bar => self.bar = true,
        }
    }

    #[must_use]
    pub fn is_invalidated(self, surface: SurfaceKind) -> bool {
        match surface {
            SurfaceKind::Scatter => self.scatter,
            SurfaceKind::Bar => self.bar,
        }
    }

    #[must_use]
    pub fn is_clean(self) -> bool {
        !self.scatter && !self.bar
    }

    /// Returns the pending set and resets it.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
