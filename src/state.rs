use crate::buffer::RollingBuffer;

/// Lifecycle of the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingFirstSample,
    SteadyState,
}

#[derive(Debug, Clone, Default)]
pub struct EstimatorState {
    pub phase: Phase,
    /// Clamped readings, newest first
    pub buffer: RollingBuffer,
    pub last_estimate: Option<f64>,
}

impl EstimatorState {
    pub fn is_initialized(&self) -> bool {
        self.phase == Phase::SteadyState
    }
}
