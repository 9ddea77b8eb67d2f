//! timeline-chart: interactive time-series line chart engine.
//!
//! The crate owns the numerical and interaction core of a line chart with
//! an overview strip: dataset model, range selection, dual coordinate
//! mapping, animated autoscale and grid/label layout. Drawing is delegated
//! to a [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartFrame, ViewportKind};
pub use error::{ChartError, ChartResult};
