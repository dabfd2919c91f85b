use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to decode payload: {0}")]
    Decode(String),

    #[error("surface backend error: {0}")]
    Backend(String),

    #[cfg(feature = "client")]
    #[error("request failed: {0}")]
    Request(String),
}
