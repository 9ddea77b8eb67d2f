use serde::{Deserialize, Serialize};

use crate::core::label_format::{
    DEFAULT_TIME_LABEL_PATTERN, format_time_label, format_value_label,
};
use crate::core::{CoordinateResolver, Dataset, Drawport, ViewWindow};

pub const DEFAULT_VALUE_FLOOR_COUNT: usize = 5;
pub const DEFAULT_TIME_LABEL_MAX_WIDTH_PX: f64 = 56.0;
pub const DEFAULT_TIME_LABEL_MIN_SPACING_PX: f64 = 24.0;

/// One horizontal value-axis level spanning the full drawport width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueGridLine {
    pub value: f64,
    pub label: String,
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
}

/// One time-axis label anchored at its left pixel edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisLabel {
    pub index: usize,
    pub timestamp: i64,
    pub label: String,
    pub x: f64,
}

/// Sizing inputs for time-axis label placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLabelLayout {
    pub max_label_width_px: f64,
    pub min_spacing_px: f64,
    pub pattern: String,
}

impl Default for TimeLabelLayout {
    fn default() -> Self {
        Self {
            max_label_width_px: DEFAULT_TIME_LABEL_MAX_WIDTH_PX,
            min_spacing_px: DEFAULT_TIME_LABEL_MIN_SPACING_PX,
            pattern: DEFAULT_TIME_LABEL_PATTERN.to_owned(),
        }
    }
}

/// Emits `floor_count + 1` evenly spaced levels from the resolver's minimum
/// to its maximum, bottom level first.
#[must_use]
pub fn layout_value_grid(resolver: &CoordinateResolver, floor_count: usize) -> Vec<ValueGridLine> {
    let floors = floor_count.max(1);
    let bounds = resolver.bounds();
    let step = bounds.span() / floors as f64;
    let drawport = resolver.drawport();

    (0..=floors)
        .map(|floor| {
            // Pin the top level to `max` so float drift never leaks into labels.
            let value = if floor == floors {
                bounds.max
            } else {
                bounds.min + step * floor as f64
            };
            ValueGridLine {
                value,
                label: format_value_label(value),
                y: resolver.y(value),
                x_start: drawport.left,
                x_end: drawport.right(),
            }
        })
        .collect()
}

/// Largest `L` with `L * (max_label_width + min_spacing) <= width`, never
/// below one.
#[must_use]
pub fn time_label_count(width_px: f64, max_label_width_px: f64, min_spacing_px: f64) -> usize {
    let slot = max_label_width_px + min_spacing_px;
    if !width_px.is_finite() || !slot.is_finite() || slot <= 0.0 || width_px <= 0.0 {
        return 1;
    }
    ((width_px / slot).floor() as usize).max(1)
}

/// Places time labels across the drawport for the current window.
///
/// The first label sits at the left edge, the last one ends at the right
/// edge, and labels in between are evenly stepped. Each label shows the
/// sample nearest to its share of the window. The count never exceeds the
/// number of samples in the window, so no timestamp repeats.
#[must_use]
pub fn layout_time_labels(
    dataset: &Dataset,
    window: ViewWindow,
    drawport: Drawport,
    layout: &TimeLabelLayout,
) -> Vec<TimeAxisLabel> {
    if dataset.is_empty() {
        return Vec::new();
    }

    let count = time_label_count(drawport.width, layout.max_label_width_px, layout.min_spacing_px)
        .min(window.sample_count());

    let label_at = |index: usize, x: f64| {
        let timestamp = dataset.timestamps()[index.min(dataset.last_index())];
        TimeAxisLabel {
            index,
            timestamp,
            label: format_time_label(timestamp, &layout.pattern),
            x,
        }
    };

    if count <= 1 {
        return vec![label_at(window.from_index, drawport.left)];
    }

    let last = (count - 1) as f64;
    let step_px = (drawport.width - layout.max_label_width_px).max(0.0) / last;
    (0..count)
        .map(|k| {
            let share = k as f64 / last;
            let index = window.from_index + (share * window.span() as f64).round() as usize;
            label_at(index, drawport.left + k as f64 * step_px)
        })
        .collect()
}
