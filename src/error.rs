use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Configuration-boundary failures.
///
/// Interaction paths (pointer events, frame sampling, pulses) never produce
/// these; degraded interaction states are expressed as values instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate series id: `{0}`")]
    DuplicateSeriesId(String),
}
