mod chart_model;
mod data_controller;
mod engine;
mod engine_config;
mod frame_builder;
mod interaction_controller;
mod json_contract;
mod render_style;

pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ViewportKind};
pub use frame_builder::ChartFrame;
pub use json_contract::{
    ABSCISSA_COLUMN_TYPE, ChartPayload, DatasetInput, LINE_COLUMN_TYPE, parse_chart_payloads,
};
pub use render_style::RenderStyle;
