use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid device rectangle: width={width}, height={height}")]
    InvalidDeviceRect { width: f64, height: f64 },

    #[error("invalid logical viewport: width={width}, height={height}")]
    InvalidLogicalViewport { width: f64, height: f64 },

    #[error("axis range must be finite: min={min}, max={max}")]
    NonFiniteRange { min: f64, max: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
