/// Valid raw reading range of the power board voltage sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    /// Range of the deployed power board ADC.
    pub const POWER_BOARD: Self = Self {
        min: 44000.0,
        max: 48000.0,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Snap a raw reading into `[min, max]`.
    ///
    /// The lower bound uses `<=`, so a reading of exactly `min` takes the
    /// clamping branch too. The result is the same value either way.
    #[inline]
    pub fn clamp(&self, raw: f64) -> f64 {
        if raw <= self.min {
            self.min
        } else if raw >= self.max {
            self.max
        } else {
            raw
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

impl Default for SensorRange {
    fn default() -> Self {
        Self::POWER_BOARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_in_range_values_through() {
        let range = SensorRange::POWER_BOARD;
        assert_eq!(range.clamp(46000.0), 46000.0);
        assert_eq!(range.clamp(44000.5), 44000.5);
        assert_eq!(range.clamp(47999.9), 47999.9);
    }

    #[test]
    fn snaps_to_bounds() {
        let range = SensorRange::POWER_BOARD;
        assert_eq!(range.clamp(44000.0), 44000.0);
        assert_eq!(range.clamp(43999.0), 44000.0);
        assert_eq!(range.clamp(48000.0), 48000.0);
        assert_eq!(range.clamp(48001.0), 48000.0);
        assert_eq!(range.clamp(f64::NEG_INFINITY), 44000.0);
        assert_eq!(range.clamp(f64::INFINITY), 48000.0);
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(SensorRange::POWER_BOARD.is_valid());
        assert!(!SensorRange::new(10.0, 10.0).is_valid());
        assert!(!SensorRange::new(10.0, 5.0).is_valid());
        assert!(!SensorRange::new(f64::NAN, 5.0).is_valid());
    }
}
