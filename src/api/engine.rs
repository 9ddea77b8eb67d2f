use std::time::Duration;

use crate::core::{
    AutoscaleEngine, CoordinateResolver, Dataset, SeriesVisibility, ValueBounds, ViewWindow,
};
use crate::error::ChartResult;
use crate::interaction::DragState;
use crate::render::Renderer;

use super::chart_model::ChartModel;
use super::frame_builder::{FrameBuilder, lower_frame};
use super::{ChartEngineConfig, ChartFrame};

/// Ordinate window used before any series has produced bounds.
const FALLBACK_BOUNDS: ValueBounds = ValueBounds { min: 0.0, max: 1.0 };

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, series visibility, range selector and the
/// two autoscale engines, and hands materialized frames to the renderer.
/// Every mutation recomputes the settled bounds before returning; drawable
/// outputs are derived from current state on each `frame()` call.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) model: Option<ChartModel>,
    pub(super) main_autoscale: AutoscaleEngine,
    pub(super) overview_autoscale: AutoscaleEngine,
    /// Time of the latest `advance_frame`; transitions start from here.
    pub(super) clock: Duration,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let animation = config.bounds_animation();

        Ok(Self {
            renderer,
            config,
            model: None,
            main_autoscale: AutoscaleEngine::new(animation),
            overview_autoscale: AutoscaleEngine::new(animation),
            clock: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.model.as_ref().map(|model| &model.dataset)
    }

    #[must_use]
    pub fn visibility(&self) -> Option<&SeriesVisibility> {
        self.model.as_ref().map(|model| &model.visibility)
    }

    #[must_use]
    pub fn is_series_enabled(&self, id: &str) -> bool {
        self.visibility()
            .is_some_and(|visibility| visibility.is_enabled(id))
    }

    #[must_use]
    pub fn view_window(&self) -> Option<ViewWindow> {
        self.model.as_ref().map(ChartModel::window)
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.model
            .as_ref()
            .map_or(DragState::Idle, |model| model.selector.state())
    }

    /// Overview pixel edges `(left, right)` of the selection band.
    #[must_use]
    pub fn selection_edges_px(&self) -> Option<(f64, f64)> {
        self.model
            .as_ref()
            .map(|model| model.selector.pixel_edges())
    }

    /// Bounds the main plot is drawn with this frame.
    #[must_use]
    pub fn main_bounds(&self) -> Option<ValueBounds> {
        self.main_autoscale.displayed()
    }

    /// Bounds the main plot is animating towards.
    #[must_use]
    pub fn main_target_bounds(&self) -> Option<ValueBounds> {
        self.main_autoscale.target()
    }

    #[must_use]
    pub fn overview_bounds(&self) -> Option<ValueBounds> {
        self.overview_autoscale.displayed()
    }

    #[must_use]
    pub fn overview_target_bounds(&self) -> Option<ValueBounds> {
        self.overview_autoscale.target()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.main_autoscale.is_animating() || self.overview_autoscale.is_animating()
    }

    /// Latest frame time passed to `advance_frame`.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Resolver for the main plot: selected window by displayed bounds.
    pub fn main_resolver(&self) -> ChartResult<Option<CoordinateResolver>> {
        let Some(model) = self.model.as_ref() else {
            return Ok(None);
        };
        let bounds = self.main_autoscale.displayed().unwrap_or(FALLBACK_BOUNDS);
        CoordinateResolver::new(
            self.config.main_drawport(),
            model.abscissa(model.window()),
            bounds,
        )
        .map(Some)
    }

    /// Resolver for the overview strip: whole dataset by overview bounds.
    pub fn overview_resolver(&self) -> ChartResult<Option<CoordinateResolver>> {
        let Some(model) = self.model.as_ref() else {
            return Ok(None);
        };
        let bounds = self
            .overview_autoscale
            .displayed()
            .unwrap_or(FALLBACK_BOUNDS);
        CoordinateResolver::new(
            self.config.overview_drawport(),
            model.abscissa(model.full_window()),
            bounds,
        )
        .map(Some)
    }

    /// Materializes every drawable output for the current state.
    pub fn frame(&self) -> ChartResult<ChartFrame> {
        FrameBuilder::new(self).build()
    }

    /// Lowers the current frame into primitives and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.frame()?;
        let primitives = lower_frame(&frame, &self.config);
        self.renderer.render(&primitives)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Recomputes the main target after a window or visibility change.
    pub(super) fn retarget_main(&mut self) {
        let target = self.model.as_ref().and_then(ChartModel::main_target);
        self.main_autoscale.retarget_pending(target);
    }

    /// Recomputes the overview target after a dataset or visibility change.
    pub(super) fn retarget_overview(&mut self) {
        let target = self.model.as_ref().and_then(ChartModel::overview_target);
        self.overview_autoscale.retarget_pending(target);
    }
}
