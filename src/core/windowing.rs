use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Inclusive index sub-range of the dataset shown in the main viewport.
///
/// For datasets with at least two samples `from_index < to_index` always
/// holds; a single-sample dataset uses the degenerate `(0, 0)` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewWindow {
    pub from_index: usize,
    pub to_index: usize,
}

impl ViewWindow {
    pub fn new(from_index: usize, to_index: usize, len: usize) -> ChartResult<Self> {
        if len == 0 {
            return Err(ChartError::EmptyDataset);
        }
        if to_index >= len || from_index > to_index || (len > 1 && from_index == to_index) {
            return Err(ChartError::InvalidData(format!(
                "view window ({from_index}, {to_index}) is invalid for {len} samples"
            )));
        }
        Ok(Self {
            from_index,
            to_index,
        })
    }

    /// Window covering every sample of a dataset with `len` samples.
    #[must_use]
    pub fn full(len: usize) -> Self {
        Self {
            from_index: 0,
            to_index: len.saturating_sub(1),
        }
    }

    /// Index distance between the two edges.
    #[must_use]
    pub fn span(self) -> usize {
        self.to_index - self.from_index
    }

    /// Number of samples inside the window, both edges included.
    #[must_use]
    pub fn sample_count(self) -> usize {
        self.span() + 1
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.from_index..=self.to_index).contains(&index)
    }
}

/// Converts an overview pixel position to a sample index:
/// `floor(px / width * len)` clamped to `[0, len - 1]`.
#[must_use]
pub fn pixel_to_index(pixel_x: f64, viewport_width: f64, len: usize) -> usize {
    if len == 0 || !viewport_width.is_finite() || viewport_width <= 0.0 || !pixel_x.is_finite() {
        return 0;
    }
    let raw = (pixel_x / viewport_width * len as f64).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(len - 1)
    }
}

/// Minimum index span the selector keeps between the window edges.
///
/// Derived from the pixel touch tolerance and never below one sample.
#[must_use]
pub fn min_span_indices(tolerance_px: f64, viewport_width: f64, len: usize) -> usize {
    if !viewport_width.is_finite() || viewport_width <= 0.0 || !tolerance_px.is_finite() {
        return 1;
    }
    let raw = (tolerance_px.max(0.0) * len as f64 / viewport_width).floor() as usize;
    raw.clamp(1, len.saturating_sub(1).max(1))
}

/// Smallest pixel gap between the handles that still maps onto at least
/// `min_span_indices` after flooring and the right-edge clamp.
#[must_use]
pub fn min_handle_gap_px(tolerance_px: f64, viewport_width: f64, len: usize) -> f64 {
    if len == 0 {
        return tolerance_px.max(0.0);
    }
    let span = min_span_indices(tolerance_px, viewport_width, len);
    let per_sample = viewport_width / len as f64;
    tolerance_px
        .max((span + 1) as f64 * per_sample)
        .min(viewport_width)
}
