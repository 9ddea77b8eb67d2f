use serde::{Deserialize, Serialize};

use crate::core::{CoordinateResolver, Dataset, Series, SeriesVisibility, ViewWindow};
use crate::render::Color;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Line geometry of one enabled series in one viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGeometry {
    pub series_id: String,
    pub color: Color,
    pub segments: Vec<LineSegment>,
}

impl SeriesGeometry {
    /// Flattens segments into an `x1, y1, x2, y2, ...` stream for line-list
    /// draw calls.
    #[must_use]
    pub fn to_flat_vertices(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.segments.len() * 4);
        for segment in &self.segments {
            out.extend_from_slice(&[
                segment.x1 as f32,
                segment.y1 as f32,
                segment.x2 as f32,
                segment.y2 as f32,
            ]);
        }
        out
    }
}

/// Projects one series over the inclusive window into adjacent segments.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry.
#[must_use]
pub fn project_line_segments(
    timestamps: &[i64],
    values: &[f64],
    window: ViewWindow,
    resolver: &CoordinateResolver,
) -> Vec<LineSegment> {
    let last = timestamps.len().min(values.len());
    if last == 0 {
        return Vec::new();
    }
    let from = window.from_index.min(last - 1);
    let to = window.to_index.min(last - 1);
    if to <= from {
        return Vec::new();
    }

    let mapped: Vec<(f64, f64)> = (from..=to)
        .map(|index| (resolver.x(timestamps[index]), resolver.y(values[index])))
        .collect();

    mapped
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        })
        .collect()
}

/// Builds geometry for every enabled series, in dataset order.
///
/// Disabled series produce no entry at all.
#[must_use]
pub fn project_series(
    dataset: &Dataset,
    visibility: &SeriesVisibility,
    window: ViewWindow,
    resolver: &CoordinateResolver,
) -> Vec<SeriesGeometry> {
    let enabled: Vec<&Series> = dataset
        .series()
        .filter(|series| visibility.is_enabled(&series.id))
        .collect();

    let project = |series: &&Series| SeriesGeometry {
        series_id: series.id.clone(),
        color: series.color,
        segments: project_line_segments(dataset.timestamps(), &series.values, window, resolver),
    };

    #[cfg(feature = "parallel-projection")]
    {
        enabled.par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        enabled.iter().map(project).collect()
    }
}
