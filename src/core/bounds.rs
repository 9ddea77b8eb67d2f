use serde::{Deserialize, Serialize};

use crate::core::{Dataset, SeriesVisibility, ViewWindow};

const FLAT_PADDING_RATIO: f64 = 0.1;
const FLAT_MIN_HALF_SPAN: f64 = 1e-6;
const FLAT_ZERO_HALF_SPAN: f64 = 1.0;

/// Vertical value extent `(min, max)` shown by one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_flat(self) -> bool {
        self.span() <= 0.0
    }

    /// Widens a zero-height window so it can be used as an ordinate domain.
    ///
    /// A flat `v` becomes `v ± max(|v| * 0.1, 1e-6)`, or `±1` around zero.
    #[must_use]
    pub fn with_min_span(self) -> Self {
        if !self.is_flat() {
            return self;
        }
        let center = self.min;
        let half = if center == 0.0 {
            FLAT_ZERO_HALF_SPAN
        } else {
            (center.abs() * FLAT_PADDING_RATIO).max(FLAT_MIN_HALF_SPAN)
        };
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Component-wise `self * (1 - t) + target * t`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            min: self.min * (1.0 - t) + target.min * t,
            max: self.max * (1.0 - t) + target.max * t,
        }
    }
}

/// Global min/max over every enabled series within the inclusive window.
///
/// Returns `None` when no series is enabled, so callers never see the
/// `+inf/-inf` seed values.
#[must_use]
pub fn compute_bounds(
    dataset: &Dataset,
    visibility: &SeriesVisibility,
    window: ViewWindow,
) -> Option<ValueBounds> {
    let last = dataset.last_index();
    let from = window.from_index.min(last);
    let to = window.to_index.min(last);

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;

    for series in dataset.series() {
        if !visibility.is_enabled(&series.id) {
            continue;
        }
        for &value in &series.values[from..=to] {
            min = min.min(value);
            max = max.max(value);
            any = true;
        }
    }

    any.then(|| ValueBounds::new(min, max))
}
