use serde::{Deserialize, Serialize};

use crate::core::{
    LineSegment, SeriesGeometry, TimeAxisLabel, ValueBounds, ValueGridLine, ViewWindow,
    layout_time_labels, layout_value_grid, project_series,
};
use crate::error::ChartResult;
use crate::interaction::{PixelRect, SelectionOverlay};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{ChartEngine, ChartEngineConfig};

/// Every drawable output of one frame, in host pixel space.
///
/// Empty when no dataset is loaded. Series geometry is empty when no
/// series is enabled, while the grid keeps the last displayed bounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartFrame {
    pub window: Option<ViewWindow>,
    pub main_bounds: Option<ValueBounds>,
    pub overview_bounds: Option<ValueBounds>,
    pub main_series: Vec<SeriesGeometry>,
    pub overview_series: Vec<SeriesGeometry>,
    pub value_grid: Vec<ValueGridLine>,
    pub time_labels: Vec<TimeAxisLabel>,
    pub selection: Option<SelectionOverlay>,
}

pub(super) struct FrameBuilder<'a, R: Renderer> {
    engine: &'a ChartEngine<R>,
}

impl<'a, R: Renderer> FrameBuilder<'a, R> {
    pub(super) fn new(engine: &'a ChartEngine<R>) -> Self {
        Self { engine }
    }

    pub(super) fn build(&self) -> ChartResult<ChartFrame> {
        let engine = self.engine;
        let Some(model) = engine.model.as_ref() else {
            return Ok(ChartFrame::default());
        };
        let config = &engine.config;
        let window = model.window();

        let mut frame = ChartFrame {
            window: Some(window),
            main_bounds: engine.main_autoscale.displayed(),
            overview_bounds: engine.overview_autoscale.displayed(),
            ..ChartFrame::default()
        };

        if let Some(resolver) = engine.main_resolver()? {
            frame.main_series = project_series(&model.dataset, &model.visibility, window, &resolver);
            if frame.main_bounds.is_some() {
                frame.value_grid = layout_value_grid(&resolver, config.value_floor_count);
            }
        }
        if let Some(resolver) = engine.overview_resolver()? {
            frame.overview_series = project_series(
                &model.dataset,
                &model.visibility,
                model.full_window(),
                &resolver,
            );
        }

        frame.time_labels = layout_time_labels(
            &model.dataset,
            window,
            config.main_drawport(),
            &config.time_labels,
        );
        if model.selector.is_enabled() {
            frame.selection = Some(model.selector.overlay(config.overview_drawport()));
        }

        Ok(frame)
    }
}

/// Lowers a frame into backend primitives, back to front: shades, grid,
/// series, selection frame, labels.
pub(super) fn lower_frame(frame: &ChartFrame, config: &ChartEngineConfig) -> RenderFrame {
    let style = config.render_style;
    let mut out = RenderFrame::new(config.surface());

    if let Some(selection) = frame.selection.as_ref() {
        for rect in [selection.unselected_left, selection.unselected_right] {
            out.push_rect(shade(rect, style.overview_shade_color));
        }
    }

    for line in &frame.value_grid {
        out.push_line(LinePrimitive::new(
            line.x_start,
            line.y,
            line.x_end,
            line.y,
            style.grid_line_width_px,
            style.grid_line_color,
        ));
    }

    for geometry in frame.main_series.iter().chain(&frame.overview_series) {
        for segment in &geometry.segments {
            out.push_line(stroke(*segment, style.series_line_width_px, geometry.color));
        }
    }

    if let Some(selection) = frame.selection.as_ref() {
        for segment in selection.frame_lines {
            out.push_line(stroke(
                segment,
                selection.frame_thickness_px,
                style.selection_frame_color,
            ));
        }
        for segment in selection.handle_lines {
            out.push_line(stroke(
                segment,
                selection.handle_width_px,
                style.selection_frame_color,
            ));
        }
    }

    let font = style.axis_label_font_size_px;
    let gap = style.axis_label_gap_px;
    for line in &frame.value_grid {
        out.push_text(TextPrimitive::new(
            line.label.clone(),
            line.x_start,
            line.y - gap,
            font,
            style.axis_label_color,
            TextHAlign::Left,
        ));
    }

    // Time labels hang below the lowest grid level, or the bottom of the
    // drawable band when no grid is shown.
    let axis_y = frame.value_grid.first().map_or_else(
        || {
            let drawport = config.main_drawport();
            drawport.bottom() - drawport.padding
        },
        |line| line.y,
    );
    for label in &frame.time_labels {
        out.push_text(TextPrimitive::new(
            label.label.clone(),
            label.x,
            axis_y + gap + font,
            font,
            style.axis_label_color,
            TextHAlign::Left,
        ));
    }

    out
}

fn stroke(segment: LineSegment, width: f64, color: Color) -> LinePrimitive {
    LinePrimitive::new(segment.x1, segment.y1, segment.x2, segment.y2, width, color)
}

fn shade(rect: PixelRect, color: Color) -> RectPrimitive {
    RectPrimitive::new(rect.x, rect.y, rect.width, rect.height, color)
}
