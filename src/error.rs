use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("dataset has no timestamps")]
    EmptyDataset,

    #[error("timestamps must be strictly increasing (violated at index {index})")]
    NonMonotonicTimestamps { index: usize },

    #[error("series `{series_id}` has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        series_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate series id `{0}`")]
    DuplicateSeries(String),

    #[error("unknown series id `{0}`")]
    UnknownSeries(String),

    #[error("invalid chart payload: {0}")]
    InvalidPayload(String),
}
