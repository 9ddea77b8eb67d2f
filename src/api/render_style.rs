use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Stroke widths, label sizing and fixed colors used when lowering a
/// `ChartFrame` into render primitives. Series keep their own colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub series_line_width_px: f64,
    pub grid_line_color: Color,
    pub grid_line_width_px: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Distance between a grid line and the baseline of its value label,
    /// and between the lowest grid line and the time-label band.
    pub axis_label_gap_px: f64,
    pub overview_shade_color: Color,
    pub selection_frame_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_width_px: 3.0,
            grid_line_color: Color::from_argb(0xFFE7_E8E9),
            grid_line_width_px: 1.0,
            axis_label_color: Color::from_argb(0xFF94_A2AB),
            axis_label_font_size_px: 16.0,
            axis_label_gap_px: 8.0,
            overview_shade_color: Color::from_argb(0xB3E7_E8E9),
            selection_frame_color: Color::from_argb(0x4D94_A2AB),
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> ChartResult<()> {
        self.grid_line_color.validate()?;
        self.axis_label_color.validate()?;
        self.overview_shade_color.validate()?;
        self.selection_frame_color.validate()?;

        for (name, value) in [
            ("series line width", self.series_line_width_px),
            ("grid line width", self.grid_line_width_px),
            ("axis label font size", self.axis_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.axis_label_gap_px.is_finite() || self.axis_label_gap_px < 0.0 {
            return Err(ChartError::InvalidData(
                "axis label gap must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}
