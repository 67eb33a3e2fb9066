#![no_std]

mod buffer;
mod config;
mod error;
mod estimator;
mod range;
mod state;
pub mod filters;
pub mod model;
pub mod polynomial;

pub use buffer::{RollingBuffer, MAX_BUFFER_LEN};
pub use config::{
    Config, ConfigError, DEFAULT_FILTER_ORDER, DEFAULT_WINDOW_SIZE, MAX_FILTER_ORDER,
    MAX_POLY_COEFFS, MAX_WINDOW_SIZE,
};
pub use error::EstimateError;
pub use estimator::VoltageTemperatureEstimator;
pub use filters::SavitzkyGolay;
pub use model::TemperatureModel;
pub use range::SensorRange;
pub use state::{EstimatorState, Phase};
