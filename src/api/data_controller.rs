use tracing::{debug, warn};

use crate::core::{Dataset, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::ChartEngine;
use super::chart_model::ChartModel;

impl<R: Renderer> ChartEngine<R> {
    /// Validates and installs a new dataset.
    ///
    /// On success every series is enabled, the window covers the full
    /// dataset and both bounds snap to their new targets. A rejected load
    /// leaves the previous dataset and all dependent state untouched.
    pub fn load_dataset(&mut self, timestamps: Vec<i64>, series: Vec<Series>) -> ChartResult<()> {
        match Dataset::new(timestamps, series) {
            Ok(dataset) => {
                self.replace_dataset(dataset);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "rejected dataset load");
                Err(err)
            }
        }
    }

    /// Installs an already validated dataset.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        debug!(
            samples = dataset.len(),
            series = dataset.series_count(),
            "load dataset"
        );
        self.model = Some(ChartModel::new(
            dataset,
            self.config.overview_viewport,
            self.config.selector,
        ));
        self.main_autoscale.reset();
        self.overview_autoscale.reset();
        self.retarget_main();
        self.retarget_overview();
    }

    /// Enables or disables one series. Returns `true` when the flag changed.
    ///
    /// Both the main and the overview bounds retarget; geometry for a
    /// disabled series disappears from the next frame.
    pub fn set_series_enabled(&mut self, id: &str, enabled: bool) -> ChartResult<bool> {
        let model = self.model_mut()?;
        let changed = model.visibility.set_enabled(id, enabled)?;
        if changed {
            debug!(series = id, enabled, "series visibility");
            self.retarget_main();
            self.retarget_overview();
        }
        Ok(changed)
    }

    /// Flips one series and returns its new flag.
    pub fn toggle_series(&mut self, id: &str) -> ChartResult<bool> {
        let model = self.model_mut()?;
        let enabled = model.visibility.toggle(id)?;
        debug!(series = id, enabled, "series visibility");
        self.retarget_main();
        self.retarget_overview();
        Ok(enabled)
    }

    fn model_mut(&mut self) -> ChartResult<&mut ChartModel> {
        self.model.as_mut().ok_or(ChartError::EmptyDataset)
    }
}
