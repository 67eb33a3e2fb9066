use heapless::Vec;

use crate::buffer::{RollingBuffer, MAX_BUFFER_LEN};
use crate::config::{Config, ConfigError};
use crate::error::EstimateError;
use crate::filters::SavitzkyGolay;
use crate::model::TemperatureModel;
use crate::state::{EstimatorState, Phase};

/// Rolling Savitzky-Golay smoother feeding a voltage-to-temperature model.
pub struct VoltageTemperatureEstimator {
    config: Config,
    filter: SavitzkyGolay,
    model: TemperatureModel,
    state: EstimatorState,
}

impl VoltageTemperatureEstimator {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let filter = SavitzkyGolay::new(config.window_size, config.filter_order)?;
        let model = TemperatureModel::from_config(&config);

        Ok(Self {
            config,
            filter,
            model,
            state: EstimatorState::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &EstimatorState {
        &self.state
    }

    pub fn filter(&self) -> &SavitzkyGolay {
        &self.filter
    }

    pub fn model(&self) -> &TemperatureModel {
        &self.model
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    pub fn buffer(&self) -> &RollingBuffer {
        &self.state.buffer
    }

    pub fn last_estimate(&self) -> Option<f64> {
        self.state.last_estimate
    }

    /// Process one raw voltage reading.
    ///
    /// The first reading only seeds the buffer and yields `Ok(None)`. Every
    /// later reading yields the temperature estimate for the center tap.
    /// On error the state is left exactly as it was before the call.
    pub fn on_sample(&mut self, raw_voltage: f64) -> Result<Option<f64>, EstimateError> {
        if raw_voltage.is_nan() {
            return Err(EstimateError::NonFiniteSample);
        }

        let clamped = self.config.range.clamp(raw_voltage);

        if self.state.phase == Phase::AwaitingFirstSample {
            self.state.buffer.fill(clamped, self.config.buffer_len());
            self.state.phase = Phase::SteadyState;
            return Ok(None);
        }

        // Work on a copy; commit only once the estimate is known to be finite.
        let mut buffer = self.state.buffer.clone();
        buffer.push_front(clamped);

        let mut window: Vec<f64, MAX_BUFFER_LEN> = Vec::new();
        buffer.copy_to(&mut window);

        let mut smoothed = [0.0_f64; MAX_BUFFER_LEN];
        self.filter.smooth(&window, &mut smoothed)?;

        let voltage = smoothed[self.config.center_index()];
        let estimate = self.model.estimate(voltage)?;

        self.state.buffer = buffer;
        self.state.last_estimate = Some(estimate);
        Ok(Some(estimate))
    }

    /// Return to awaiting the first sample
    pub fn reset(&mut self) {
        self.state = EstimatorState::default();
    }
}
