use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{Dataset, Series};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::ChartEngine;

pub const ABSCISSA_COLUMN_TYPE: &str = "x";
pub const LINE_COLUMN_TYPE: &str = "line";

/// One chart of the array-of-charts payload.
///
/// `columns` holds one array per column whose first element is the column
/// key; `types`, `names` and `colors` are keyed by that same column key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub columns: Vec<Vec<Value>>,
    pub types: IndexMap<String, String>,
    #[serde(default)]
    pub names: IndexMap<String, String>,
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

/// Columns of one chart payload, decoded but not yet validated as a
/// `Dataset`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInput {
    pub timestamps: Vec<i64>,
    pub series: Vec<Series>,
}

impl DatasetInput {
    pub fn into_dataset(self) -> ChartResult<Dataset> {
        Dataset::new(self.timestamps, self.series)
    }
}

impl ChartPayload {
    /// Decodes the columns. Line series keep the order they appear in
    /// `columns`; a series without a color entry is drawn black.
    pub fn decode(&self) -> ChartResult<DatasetInput> {
        let mut timestamps: Option<Vec<i64>> = None;
        let mut series = Vec::new();

        for column in &self.columns {
            let (key, cells) = split_column(column)?;
            let kind = self.column_type(key)?;

            match kind {
                ABSCISSA_COLUMN_TYPE => {
                    if timestamps.is_some() {
                        return Err(ChartError::InvalidPayload(
                            "payload declares more than one `x` column".to_owned(),
                        ));
                    }
                    let values = cells
                        .iter()
                        .enumerate()
                        .map(|(position, cell)| timestamp_cell(key, position, cell))
                        .collect::<ChartResult<Vec<_>>>()?;
                    timestamps = Some(values);
                }
                LINE_COLUMN_TYPE => {
                    let values = cells
                        .iter()
                        .enumerate()
                        .map(|(position, cell)| value_cell(key, position, cell))
                        .collect::<ChartResult<Vec<_>>>()?;
                    let name = self.names.get(key).map_or(key, String::as_str);
                    let color = match self.colors.get(key) {
                        Some(hex) => Color::from_hex(hex).map_err(|e| {
                            ChartError::InvalidPayload(format!("column `{key}`: {e}"))
                        })?,
                        None => Color::BLACK,
                    };
                    series.push(Series::new(key, name, color, values));
                }
                other => {
                    return Err(ChartError::InvalidPayload(format!(
                        "column `{key}` has unsupported type `{other}`"
                    )));
                }
            }
        }

        let timestamps = timestamps.ok_or_else(|| {
            ChartError::InvalidPayload("payload has no `x` column".to_owned())
        })?;
        Ok(DatasetInput { timestamps, series })
    }

    fn column_type<'a>(&'a self, key: &'a str) -> ChartResult<&'a str> {
        match self.types.get(key) {
            Some(kind) => Ok(kind.as_str()),
            None if key == ABSCISSA_COLUMN_TYPE => Ok(ABSCISSA_COLUMN_TYPE),
            None => Err(ChartError::InvalidPayload(format!(
                "column `{key}` has no declared type"
            ))),
        }
    }
}

/// Parses a JSON array of chart payloads.
pub fn parse_chart_payloads(input: &str) -> ChartResult<Vec<DatasetInput>> {
    let payloads: Vec<ChartPayload> = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidPayload(format!("failed to parse chart json: {e}")))?;
    let decoded = payloads
        .iter()
        .map(ChartPayload::decode)
        .collect::<ChartResult<Vec<_>>>()?;
    debug!(charts = decoded.len(), "decoded chart payloads");
    Ok(decoded)
}

impl<R: Renderer> ChartEngine<R> {
    /// Validates a decoded payload and loads it as the current dataset.
    pub fn load_dataset_input(&mut self, input: DatasetInput) -> ChartResult<()> {
        self.load_dataset(input.timestamps, input.series)
    }
}

fn split_column(column: &[Value]) -> ChartResult<(&str, &[Value])> {
    let Some((head, cells)) = column.split_first() else {
        return Err(ChartError::InvalidPayload(
            "column must start with its key".to_owned(),
        ));
    };
    let key = head.as_str().ok_or_else(|| {
        ChartError::InvalidPayload(format!("column key must be a string, got {head}"))
    })?;
    Ok((key, cells))
}

fn timestamp_cell(key: &str, position: usize, cell: &Value) -> ChartResult<i64> {
    cell.as_i64()
        .or_else(|| cell.as_f64().filter(|v| v.fract() == 0.0).map(|v| v as i64))
        .ok_or_else(|| {
            ChartError::InvalidPayload(format!(
                "column `{key}` cell {position} is not an integer timestamp: {cell}"
            ))
        })
}

fn value_cell(key: &str, position: usize, cell: &Value) -> ChartResult<f64> {
    cell.as_f64().ok_or_else(|| {
        ChartError::InvalidPayload(format!(
            "column `{key}` cell {position} is not a number: {cell}"
        ))
    })
}
