use heapless::Vec;

use crate::config::{ConfigError, MAX_FILTER_ORDER, MAX_WINDOW_SIZE};
use crate::error::EstimateError;

const DIM: usize = MAX_FILTER_ORDER + 1;
const PIVOT_EPSILON: f64 = 1e-12;

/// Savitzky-Golay smoothing filter.
///
/// Coefficients are computed once at construction as the zeroth row of the
/// least-squares pseudo-inverse of the Vandermonde matrix over the window
/// offsets `-h..=h`. Offsets are scaled to `[-1, 1]` before fitting; the
/// smoothing row does not depend on that scale.
#[derive(Debug, Clone)]
pub struct SavitzkyGolay {
    coefficients: Vec<f64, MAX_WINDOW_SIZE>,
    window_size: usize,
    order: usize,
}

impl SavitzkyGolay {
    pub fn new(window_size: usize, order: usize) -> Result<Self, ConfigError> {
        Self::validate(window_size, order)?;

        let half = (window_size - 1) / 2;
        let n = order + 1;
        let scale = if half == 0 { 1.0 } else { half as f64 };

        // Power sums: sums[p] = sum over offsets of x^p
        let mut sums = [0.0_f64; 2 * DIM - 1];
        for k in 0..window_size {
            let x = (k as f64 - half as f64) / scale;
            let mut power = 1.0;
            for sum in sums.iter_mut().take(2 * n - 1) {
                *sum += power;
                power *= x;
            }
        }

        let mut normal = [[0.0_f64; DIM]; DIM];
        for (i, row) in normal.iter_mut().enumerate().take(n) {
            for (j, cell) in row.iter_mut().enumerate().take(n) {
                *cell = sums[i + j];
            }
        }

        // Solve normal * c = e0
        let mut rhs = [0.0_f64; DIM];
        rhs[0] = 1.0;
        let c = solve(&mut normal, &mut rhs, n)?;

        let mut coefficients = Vec::new();
        for k in 0..window_size {
            let x = (k as f64 - half as f64) / scale;
            let mut power = 1.0;
            let mut weight = 0.0;
            for cj in c.iter().take(n) {
                weight += cj * power;
                power *= x;
            }
            let _ = coefficients.push(weight);
        }

        Ok(Self {
            coefficients,
            window_size,
            order,
        })
    }

    /// Check window/order constraints without building a filter.
    pub const fn validate(window_size: usize, order: usize) -> Result<(), ConfigError> {
        if order > MAX_FILTER_ORDER {
            return Err(ConfigError::FilterOrderTooLarge(order));
        }
        if window_size % 2 == 0 {
            return Err(ConfigError::EvenWindowSize(window_size));
        }
        if window_size < order + 1 {
            return Err(ConfigError::WindowTooSmall {
                window_size,
                filter_order: order,
            });
        }
        if window_size > MAX_WINDOW_SIZE {
            return Err(ConfigError::WindowTooLarge(window_size));
        }
        Ok(())
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn half_window(&self) -> usize {
        (self.window_size - 1) / 2
    }

    /// Smooth `input` into `output`, one output per input sample.
    ///
    /// The signal is extended by half a window at both ends with values
    /// reflected through the end samples. `output` must be at least as long
    /// as `input`; extra slots are left untouched.
    pub fn smooth(&self, input: &[f64], output: &mut [f64]) -> Result<(), EstimateError> {
        if output.len() < input.len() {
            return Err(EstimateError::OutputTooShort {
                len: output.len(),
                required: input.len(),
            });
        }
        for (index, out) in output.iter_mut().enumerate().take(input.len()) {
            *out = self.smooth_at(input, index)?;
        }
        Ok(())
    }

    /// Smoothed value at a single input index.
    pub fn smooth_at(&self, input: &[f64], index: usize) -> Result<f64, EstimateError> {
        let half = self.half_window();
        if input.len() < half + 1 || index >= input.len() {
            return Err(EstimateError::InputTooShort {
                len: input.len(),
                window_size: self.window_size,
            });
        }

        let mut acc = 0.0;
        for (k, coefficient) in self.coefficients.iter().enumerate() {
            let position = index as isize + k as isize - half as isize;
            acc += coefficient * extended(input, position);
        }

        if !acc.is_finite() {
            return Err(EstimateError::NonFiniteSmoothing { index });
        }
        Ok(acc)
    }
}

/// Sample of the input extended past both ends.
///
/// Front: `y[0] - |y[j] - y[0]|` at position `-j`.
/// Back: `y[n-1] + |y[n-1-j] - y[n-1]|` at position `n-1+j`.
#[inline]
fn extended(input: &[f64], position: isize) -> f64 {
    let n = input.len() as isize;
    if position < 0 {
        let first = input[0];
        first - libm::fabs(input[(-position) as usize] - first)
    } else if position >= n {
        let last = input[(n - 1) as usize];
        let j = position - (n - 1);
        last + libm::fabs(input[(n - 1 - j) as usize] - last)
    } else {
        input[position as usize]
    }
}

/// Gaussian elimination with partial pivoting on the leading `n x n` block.
fn solve(
    matrix: &mut [[f64; DIM]; DIM],
    rhs: &mut [f64; DIM],
    n: usize,
) -> Result<[f64; DIM], ConfigError> {
    for col in 0..n {
        let mut pivot_row = col;
        for row in col + 1..n {
            if libm::fabs(matrix[row][col]) > libm::fabs(matrix[pivot_row][col]) {
                pivot_row = row;
            }
        }
        if libm::fabs(matrix[pivot_row][col]) < PIVOT_EPSILON {
            return Err(ConfigError::SingularFit);
        }
        matrix.swap(col, pivot_row);
        rhs.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..n {
                matrix[row][k] -= factor * matrix[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut solution = [0.0_f64; DIM];
    for row in (0..n).rev() {
        let mut acc = rhs[row];
        for k in row + 1..n {
            acc -= matrix[row][k] * solution[k];
        }
        solution[row] = acc / matrix[row][row];
    }
    Ok(solution)
}
