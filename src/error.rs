use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("labels and values are not index-aligned: labels={labels}, values={values}")]
    LengthMismatch { labels: usize, values: usize },

    #[error("charting backend failed: {0}")]
    Backend(String),
}
