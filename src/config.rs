use heapless::Vec;

use crate::filters::SavitzkyGolay;
use crate::range::SensorRange;

/// Savitzky-Golay window length used on the power board.
pub const DEFAULT_WINDOW_SIZE: usize = 61;
/// Polynomial order of the Savitzky-Golay fit used on the power board.
pub const DEFAULT_FILTER_ORDER: usize = 3;

pub const MAX_WINDOW_SIZE: usize = 127;
pub const MAX_FILTER_ORDER: usize = 8;
pub const MAX_POLY_COEFFS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    EvenWindowSize(usize),
    WindowTooSmall { window_size: usize, filter_order: usize },
    WindowTooLarge(usize),
    FilterOrderTooLarge(usize),
    EmptyPolynomial,
    TooManyCoefficients(usize),
    NonFiniteParameter(&'static str),
    InvalidSensorRange,
    SingularFit,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EvenWindowSize(size) => {
                write!(f, "window_size must be odd, got {}", size)
            }
            ConfigError::WindowTooSmall {
                window_size,
                filter_order,
            } => write!(
                f,
                "window_size {} is too small for filter_order {}",
                window_size, filter_order
            ),
            ConfigError::WindowTooLarge(size) => {
                write!(f, "window_size must be <= {}, got {}", MAX_WINDOW_SIZE, size)
            }
            ConfigError::FilterOrderTooLarge(order) => {
                write!(f, "filter_order must be <= {}, got {}", MAX_FILTER_ORDER, order)
            }
            ConfigError::EmptyPolynomial => write!(f, "abcd must hold at least one coefficient"),
            ConfigError::TooManyCoefficients(count) => write!(
                f,
                "abcd holds {} coefficients, at most {} are supported",
                count, MAX_POLY_COEFFS
            ),
            ConfigError::NonFiniteParameter(name) => write!(f, "{} must be finite", name),
            ConfigError::InvalidSensorRange => {
                write!(f, "sensor range min must be less than max")
            }
            ConfigError::SingularFit => write!(f, "Savitzky-Golay normal equations are singular"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Estimator configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Rotation angle of the temperature correction, radians
    pub theta: f64,
    /// Offset added after the rotation
    pub off_y: f64,
    /// Polynomial coefficients, highest degree first
    pub abcd: Vec<f64, MAX_POLY_COEFFS>,
    pub window_size: usize,
    pub filter_order: usize,
    pub range: SensorRange,
}

impl Config {
    /// Build a configuration with the deployed window, order and sensor range.
    pub fn new(theta: f64, off_y: f64, abcd: &[f64]) -> Result<Self, ConfigError> {
        if abcd.is_empty() {
            return Err(ConfigError::EmptyPolynomial);
        }
        let abcd =
            Vec::from_slice(abcd).map_err(|_| ConfigError::TooManyCoefficients(abcd.len()))?;

        Ok(Self {
            theta,
            off_y,
            abcd,
            window_size: DEFAULT_WINDOW_SIZE,
            filter_order: DEFAULT_FILTER_ORDER,
            range: SensorRange::POWER_BOARD,
        })
    }

    /// Length of the rolling buffer: one full window on either side of the center tap.
    pub const fn buffer_len(&self) -> usize {
        2 * self.window_size + 1
    }

    /// Index of the zero-lag output within the rolling buffer.
    pub const fn center_index(&self) -> usize {
        self.window_size
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        SavitzkyGolay::validate(self.window_size, self.filter_order)?;

        if self.abcd.is_empty() {
            return Err(ConfigError::EmptyPolynomial);
        }
        if !self.theta.is_finite() {
            return Err(ConfigError::NonFiniteParameter("theta"));
        }
        if !self.off_y.is_finite() {
            return Err(ConfigError::NonFiniteParameter("off_y"));
        }
        if self.abcd.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::NonFiniteParameter("abcd"));
        }

        if !self.range.is_valid() {
            return Err(ConfigError::InvalidSensorRange);
        }

        Ok(())
    }
}
