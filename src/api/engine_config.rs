use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::label_format::validate_time_label_pattern;
use crate::core::{
    DEFAULT_BOUNDS_ANIMATION, DEFAULT_VALUE_FLOOR_COUNT, Drawport, TimeLabelLayout, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HitPriority, RangeSelectorConfig};

use super::RenderStyle;

const DEFAULT_MAIN_PADDING_PX: f64 = 32.0;
const DEFAULT_OVERVIEW_PADDING_PX: f64 = 4.0;
const DEFAULT_OVERVIEW_GAP_PX: f64 = 16.0;

/// Which of the two drawing surfaces an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportKind {
    Main,
    Overview,
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup without inventing their own
/// format. Missing fields fall back to defaults on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub main_viewport: Viewport,
    pub overview_viewport: Viewport,
    /// Vertical space between the main plot and the overview strip.
    #[serde(default = "default_overview_gap_px")]
    pub overview_gap_px: f64,
    /// Top/bottom band of the main plot reserved for labels.
    #[serde(default = "default_main_padding_px")]
    pub main_padding_px: f64,
    #[serde(default = "default_overview_padding_px")]
    pub overview_padding_px: f64,
    #[serde(default)]
    pub selector: RangeSelectorConfig,
    #[serde(default = "default_value_floor_count")]
    pub value_floor_count: usize,
    #[serde(default)]
    pub time_labels: TimeLabelLayout,
    #[serde(default = "default_bounds_animation_ms")]
    pub bounds_animation_ms: u64,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl ChartEngineConfig {
    /// Creates a config with default paddings, tolerances and label sizing.
    #[must_use]
    pub fn new(main_viewport: Viewport, overview_viewport: Viewport) -> Self {
        Self {
            main_viewport,
            overview_viewport,
            overview_gap_px: default_overview_gap_px(),
            main_padding_px: default_main_padding_px(),
            overview_padding_px: default_overview_padding_px(),
            selector: RangeSelectorConfig::default(),
            value_floor_count: default_value_floor_count(),
            time_labels: TimeLabelLayout::default(),
            bounds_animation_ms: default_bounds_animation_ms(),
            render_style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_paddings(mut self, main_padding_px: f64, overview_padding_px: f64) -> Self {
        self.main_padding_px = main_padding_px;
        self.overview_padding_px = overview_padding_px;
        self
    }

    #[must_use]
    pub fn with_overview_gap(mut self, overview_gap_px: f64) -> Self {
        self.overview_gap_px = overview_gap_px;
        self
    }

    #[must_use]
    pub fn with_touch_tolerance(mut self, touch_tolerance_px: f64) -> Self {
        self.selector.touch_tolerance_px = touch_tolerance_px;
        self
    }

    #[must_use]
    pub fn with_hit_priority(mut self, hit_priority: HitPriority) -> Self {
        self.selector.hit_priority = hit_priority;
        self
    }

    #[must_use]
    pub fn with_value_floor_count(mut self, value_floor_count: usize) -> Self {
        self.value_floor_count = value_floor_count;
        self
    }

    #[must_use]
    pub fn with_time_label_layout(mut self, layout: TimeLabelLayout) -> Self {
        self.time_labels = layout;
        self
    }

    /// Sets the bounds transition length; `0` disables the animation.
    #[must_use]
    pub fn with_bounds_animation_ms(mut self, bounds_animation_ms: u64) -> Self {
        self.bounds_animation_ms = bounds_animation_ms;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    #[must_use]
    pub fn bounds_animation(&self) -> Duration {
        Duration::from_millis(self.bounds_animation_ms)
    }

    #[must_use]
    pub fn viewport(&self, kind: ViewportKind) -> Viewport {
        match kind {
            ViewportKind::Main => self.main_viewport,
            ViewportKind::Overview => self.overview_viewport,
        }
    }

    #[must_use]
    pub fn main_drawport(&self) -> Drawport {
        Drawport::new(self.main_viewport, 0.0, 0.0, self.main_padding_px)
    }

    /// The overview strip sits below the main plot, separated by the gap.
    #[must_use]
    pub fn overview_drawport(&self) -> Drawport {
        let top = f64::from(self.main_viewport.height) + self.overview_gap_px;
        Drawport::new(self.overview_viewport, 0.0, top, self.overview_padding_px)
    }

    /// Host surface enclosing both drawports.
    #[must_use]
    pub fn surface(&self) -> Viewport {
        let overview = self.overview_drawport();
        Viewport::new(
            self.main_viewport.width.max(self.overview_viewport.width),
            overview.bottom().ceil() as u32,
        )
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.main_viewport.validate()?;
        self.overview_viewport.validate()?;

        for (name, value) in [
            ("overview gap", self.overview_gap_px),
            ("main padding", self.main_padding_px),
            ("overview padding", self.overview_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.main_padding_px * 2.0 >= f64::from(self.main_viewport.height) {
            return Err(ChartError::InvalidData(
                "main padding leaves no drawable height".to_owned(),
            ));
        }
        if self.overview_padding_px * 2.0 >= f64::from(self.overview_viewport.height) {
            return Err(ChartError::InvalidData(
                "overview padding leaves no drawable height".to_owned(),
            ));
        }

        let selector = self.selector;
        if !selector.touch_tolerance_px.is_finite() || selector.touch_tolerance_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "touch tolerance must be finite and > 0".to_owned(),
            ));
        }
        if !selector.frame_thickness_px.is_finite()
            || selector.frame_thickness_px <= 0.0
            || !selector.handle_width_px.is_finite()
            || selector.handle_width_px <= 0.0
        {
            return Err(ChartError::InvalidData(
                "selection frame thickness and handle width must be finite and > 0".to_owned(),
            ));
        }

        if self.value_floor_count == 0 {
            return Err(ChartError::InvalidData(
                "value floor count must be >= 1".to_owned(),
            ));
        }

        let labels = &self.time_labels;
        if !labels.max_label_width_px.is_finite()
            || labels.max_label_width_px <= 0.0
            || !labels.min_spacing_px.is_finite()
            || labels.min_spacing_px < 0.0
        {
            return Err(ChartError::InvalidData(
                "time label width must be > 0 and spacing >= 0".to_owned(),
            ));
        }
        validate_time_label_pattern(&labels.pattern)?;

        self.render_style.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_overview_gap_px() -> f64 {
    DEFAULT_OVERVIEW_GAP_PX
}

fn default_main_padding_px() -> f64 {
    DEFAULT_MAIN_PADDING_PX
}

fn default_overview_padding_px() -> f64 {
    DEFAULT_OVERVIEW_PADDING_PX
}

fn default_value_floor_count() -> usize {
    DEFAULT_VALUE_FLOOR_COUNT
}

fn default_bounds_animation_ms() -> u64 {
    DEFAULT_BOUNDS_ANIMATION.as_millis() as u64
}
