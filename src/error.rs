/// Numeric failure while processing a single sample.
///
/// Any of these aborts processing of that sample only. The estimator keeps
/// the state it had before the call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimateError {
    /// Raw reading was NaN
    NonFiniteSample,
    /// Fewer samples than half a window plus one
    InputTooShort { len: usize, window_size: usize },
    /// Output slice shorter than the input
    OutputTooShort { len: usize, required: usize },
    /// Smoothing produced a non-finite value at `index`
    NonFiniteSmoothing { index: usize },
    /// Polynomial or rotation produced a non-finite value
    NonFiniteEstimate,
}

impl core::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EstimateError::NonFiniteSample => write!(f, "raw voltage sample is NaN"),
            EstimateError::InputTooShort { len, window_size } => write!(
                f,
                "{} samples are too few for a window of {}",
                len, window_size
            ),
            EstimateError::OutputTooShort { len, required } => write!(
                f,
                "output holds {} slots, {} are required",
                len, required
            ),
            EstimateError::NonFiniteSmoothing { index } => {
                write!(f, "smoothing overflowed at index {}", index)
            }
            EstimateError::NonFiniteEstimate => {
                write!(f, "temperature estimate is not finite")
            }
        }
    }
}

impl core::error::Error for EstimateError {}
