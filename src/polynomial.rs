//! Polynomial evaluation.

use num_traits::Float;

/// Evaluate a polynomial at `x` with Horner's scheme.
///
/// Coefficients are ordered highest degree first, so `[a, b, c, d]` is
/// `a*x^3 + b*x^2 + c*x + d`. An empty slice evaluates to zero.
#[inline]
pub fn polyval<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &coefficient| acc * x + coefficient)
}

/// Degree of the polynomial described by `coefficients`, ignoring leading zeros.
///
/// Returns `None` for the zero polynomial.
pub fn degree<T: Float>(coefficients: &[T]) -> Option<usize> {
    let first = coefficients.iter().position(|c| !c.is_zero())?;
    Some(coefficients.len() - 1 - first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(polyval::<f64>(&[], 3.0), 0.0);
    }

    #[test]
    fn constant() {
        assert_eq!(polyval(&[4.5_f64], 1000.0), 4.5);
    }

    #[test]
    fn highest_degree_first() {
        // 2x^2 + 3x + 1 at x = 2
        assert_eq!(polyval(&[2.0_f64, 3.0, 1.0], 2.0), 15.0);
        // x^3 - x at x = 3
        assert_eq!(polyval(&[1.0_f64, 0.0, -1.0, 0.0], 3.0), 24.0);
    }

    #[test]
    fn identity_cubic_slot() {
        assert_eq!(polyval(&[0.0_f64, 0.0, 1.0, 0.0], 46000.0), 46000.0);
    }

    #[test]
    fn works_for_f32() {
        assert_eq!(polyval(&[1.0_f32, 1.0], 2.0), 3.0);
    }

    #[test]
    fn degree_skips_leading_zeros() {
        assert_eq!(degree(&[0.0_f64, 0.0, 1.0, 0.0]), Some(1));
        assert_eq!(degree(&[2.0_f64, 0.0, 0.0]), Some(2));
        assert_eq!(degree(&[0.0_f64, 0.0]), None);
        assert_eq!(degree::<f64>(&[]), None);
    }
}
