//! Voltage-to-temperature mapping.
//!
//! The smoothed voltage is passed through a calibration polynomial and the
//! `(voltage, polynomial)` pair is then rotated by `theta`:
//! `t = v * sin(theta) + p(v) * cos(theta) + off_y`.

use heapless::Vec;

use crate::config::{Config, MAX_POLY_COEFFS};
use crate::error::EstimateError;
use crate::polynomial::polyval;

/// Calibration polynomial plus theta rotation and offset.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureModel {
    abcd: Vec<f64, MAX_POLY_COEFFS>,
    sin_theta: f64,
    cos_theta: f64,
    off_y: f64,
}

impl TemperatureModel {
    pub fn new(theta: f64, off_y: f64, abcd: Vec<f64, MAX_POLY_COEFFS>) -> Self {
        Self {
            abcd,
            sin_theta: libm::sin(theta),
            cos_theta: libm::cos(theta),
            off_y,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.theta, config.off_y, config.abcd.clone())
    }

    /// Polynomial part only, before rotation and offset
    #[inline]
    pub fn raw_temperature(&self, voltage: f64) -> f64 {
        polyval(&self.abcd, voltage)
    }

    /// Final temperature estimate for a smoothed voltage.
    pub fn estimate(&self, voltage: f64) -> Result<f64, EstimateError> {
        let raw = self.raw_temperature(voltage);
        let rotated = voltage * self.sin_theta + raw * self.cos_theta;
        let estimate = rotated + self.off_y;

        if !estimate.is_finite() {
            return Err(EstimateError::NonFiniteEstimate);
        }
        Ok(estimate)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.abcd
    }

    pub fn off_y(&self) -> f64 {
        self.off_y
    }
}
