use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of one drawing surface (main plot or overview strip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Placement of a viewport inside the host surface.
///
/// `left`/`top` are the origin offset, `padding` is the band reserved at the
/// top and bottom of the drawport for labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drawport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Drawport {
    #[must_use]
    pub fn new(viewport: Viewport, left: f64, top: f64, padding: f64) -> Self {
        Self {
            left,
            top,
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
            padding,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
