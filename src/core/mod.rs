pub mod autoscale;
pub mod bounds;
pub mod coordinate;
pub mod dataset;
pub mod grid;
pub mod label_format;
pub mod line_series;
pub mod scale;
pub mod types;
pub mod visibility;
pub mod windowing;

pub use autoscale::{AutoscaleEngine, BoundsTransition, DEFAULT_BOUNDS_ANIMATION};
pub use bounds::{ValueBounds, compute_bounds};
pub use coordinate::CoordinateResolver;
pub use dataset::{Dataset, Series};
pub use grid::{
    DEFAULT_VALUE_FLOOR_COUNT, TimeAxisLabel, TimeLabelLayout, ValueGridLine, layout_time_labels,
    layout_value_grid, time_label_count,
};
pub use label_format::{DEFAULT_TIME_LABEL_PATTERN, format_time_label, format_value_label};
pub use line_series::{LineSegment, SeriesGeometry, project_line_segments, project_series};
pub use scale::LinearScale;
pub use types::{Drawport, Viewport};
pub use visibility::SeriesVisibility;
pub use windowing::{ViewWindow, min_handle_gap_px, min_span_indices, pixel_to_index};
