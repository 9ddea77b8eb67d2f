use indexmap::IndexMap;

use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};

/// Per-series enabled flags.
///
/// The id set is fixed at construction; toggles only flip flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeriesVisibility {
    enabled: IndexMap<String, bool>,
}

impl SeriesVisibility {
    /// All series of `dataset` start enabled.
    #[must_use]
    pub fn all_enabled(dataset: &Dataset) -> Self {
        Self {
            enabled: dataset.series_ids().map(|id| (id.to_owned(), true)).collect(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.get(id).copied().unwrap_or(false)
    }

    /// Sets a flag and reports whether it actually changed.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> ChartResult<bool> {
        let flag = self
            .enabled
            .get_mut(id)
            .ok_or_else(|| ChartError::UnknownSeries(id.to_owned()))?;
        let changed = *flag != enabled;
        *flag = enabled;
        Ok(changed)
    }

    /// Flips a flag and returns the new value.
    pub fn toggle(&mut self, id: &str) -> ChartResult<bool> {
        let flag = self
            .enabled
            .get_mut(id)
            .ok_or_else(|| ChartError::UnknownSeries(id.to_owned()))?;
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn enabled_ids(&self) -> impl Iterator<Item = &str> {
        self.enabled
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(id, _)| id.as_str())
    }

    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.enabled.values().any(|enabled| *enabled)
    }
}
