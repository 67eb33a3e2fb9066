/// Smoothing filters for raw sensor windows.
///
/// Filters operate on whole buffers in raw `f64` space and report numeric
/// failures instead of propagating NaN or infinity.
mod savgol;

pub use savgol::SavitzkyGolay;
