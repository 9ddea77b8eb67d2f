use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// One named value column aligned index-for-index with the dataset timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: Color,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            values,
        }
    }
}

/// Immutable timestamp + multi-series table backing one chart instance.
///
/// Series are keyed by id in load order, so lookups never scan the whole set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    timestamps: Vec<i64>,
    series: IndexMap<String, Series>,
}

impl Dataset {
    /// Validates and builds a dataset.
    ///
    /// Rejects empty timestamp columns, non-increasing timestamps, duplicate
    /// series ids, misaligned value columns and non-finite values.
    pub fn new(timestamps: Vec<i64>, series: Vec<Series>) -> ChartResult<Self> {
        if timestamps.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        if let Some(position) = timestamps.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(ChartError::NonMonotonicTimestamps {
                index: position + 1,
            });
        }

        let expected = timestamps.len();
        let mut by_id = IndexMap::with_capacity(series.len());
        for entry in series {
            if entry.values.len() != expected {
                return Err(ChartError::SeriesLengthMismatch {
                    series_id: entry.id,
                    expected,
                    actual: entry.values.len(),
                });
            }
            if entry.values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` contains non-finite values",
                    entry.id
                )));
            }
            if by_id.contains_key(&entry.id) {
                return Err(ChartError::DuplicateSeries(entry.id));
            }
            by_id.insert(entry.id.clone(), entry);
        }

        Ok(Self {
            timestamps,
            series: by_id,
        })
    }

    /// Number of samples `N` shared by the timestamps and every series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.timestamps.len().saturating_sub(1)
    }

    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    #[must_use]
    pub fn timestamp(&self, index: usize) -> Option<i64> {
        self.timestamps.get(index).copied()
    }

    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn series_by_id(&self, id: &str) -> Option<&Series> {
        self.series.get(id)
    }

    pub fn series_ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}
