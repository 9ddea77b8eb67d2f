use crate::core::{Dataset, SeriesVisibility, ValueBounds, ViewWindow, Viewport, compute_bounds};
use crate::interaction::{RangeSelector, RangeSelectorConfig};

/// Per-dataset state. Replaced as a whole when a new dataset is loaded.
#[derive(Debug, Clone)]
pub(super) struct ChartModel {
    pub(super) dataset: Dataset,
    pub(super) visibility: SeriesVisibility,
    pub(super) selector: RangeSelector,
}

impl ChartModel {
    pub(super) fn new(dataset: Dataset, overview: Viewport, selector: RangeSelectorConfig) -> Self {
        let visibility = SeriesVisibility::all_enabled(&dataset);
        let selector = RangeSelector::new(dataset.len(), overview, selector);
        Self {
            dataset,
            visibility,
            selector,
        }
    }

    pub(super) fn window(&self) -> ViewWindow {
        self.selector.window()
    }

    pub(super) fn full_window(&self) -> ViewWindow {
        ViewWindow::full(self.dataset.len())
    }

    /// Settled bounds of the main plot for the selected window.
    pub(super) fn main_target(&self) -> Option<ValueBounds> {
        compute_bounds(&self.dataset, &self.visibility, self.window())
    }

    /// Settled bounds of the overview strip, always over the whole dataset.
    pub(super) fn overview_target(&self) -> Option<ValueBounds> {
        compute_bounds(&self.dataset, &self.visibility, self.full_window())
    }

    /// First and last timestamp of `window`.
    pub(super) fn abscissa(&self, window: ViewWindow) -> (i64, i64) {
        let timestamps = self.dataset.timestamps();
        let last = self.dataset.last_index();
        (
            timestamps[window.from_index.min(last)],
            timestamps[window.to_index.min(last)],
        )
    }
}
