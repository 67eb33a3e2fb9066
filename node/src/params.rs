//! Parameter store for the volt_filt node
//!
//! Parameters are read once at startup from a TOML file. `theta`, `off_y`
//! and `abcd` are required; the `[node]` and `[topics]` sections are
//! optional and fall back to the power board defaults.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use volt_filt::Config;

/// Raw contents of the parameter file
#[derive(Debug, Clone, Deserialize)]
pub struct NodeParams {
    /// Rotation angle, radians
    pub theta: Option<f64>,
    /// Offset added to the rotated estimate
    pub off_y: Option<f64>,
    /// Calibration polynomial, highest degree first
    pub abcd: Option<Vec<f64>>,
    #[serde(default)]
    pub node: NodeSection,
    #[serde(default)]
    pub topics: TopicSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NodeSection {
    pub name: String,
    /// Wake-up period of the idle loop
    pub idle_period_secs: f64,
}

impl Default for NodeSection {
    fn default() -> Self {
        Self {
            name: "volt_filt".to_string(),
            idle_period_secs: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TopicSection {
    pub input: String,
    pub output: String,
}

impl Default for TopicSection {
    fn default() -> Self {
        Self {
            input: "/power_board/voltage".to_string(),
            output: "/power_board/temperature_estimate".to_string(),
        }
    }
}

impl NodeParams {
    /// Load parameters from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let params: NodeParams = toml::from_str(contents)?;
        Ok(params)
    }

    /// Estimator configuration built from the required parameters.
    ///
    /// Fails with [`Error::MissingParameter`] naming the first absent one.
    pub fn estimator_config(&self) -> Result<Config> {
        let theta = self.theta.ok_or(Error::MissingParameter("theta"))?;
        let off_y = self.off_y.ok_or(Error::MissingParameter("off_y"))?;
        let abcd = self
            .abcd
            .as_deref()
            .ok_or(Error::MissingParameter("abcd"))?;

        let config = Config::new(theta, off_y, abcd)?;
        config.validate()?;
        Ok(config)
    }

    pub fn idle_period(&self) -> Result<Duration> {
        let secs = self.node.idle_period_secs;
        if !secs.is_finite() || secs <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "idle_period_secs",
                reason: format!("must be a positive number of seconds, got {}", secs),
            });
        }
        Ok(Duration::from_secs_f64(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_parameter_file() {
        let toml_content = r#"
theta = 0.01
off_y = 5.0
abcd = [1.0e-6, -0.1, 2.0, 0.0]

[node]
name = "volt_filt_test"
idle_period_secs = 0.5

[topics]
input = "/board/voltage"
output = "/board/temperature"
"#;

        let params = NodeParams::from_toml_str(toml_content).unwrap();
        assert_eq!(params.node.name, "volt_filt_test");
        assert_eq!(params.topics.input, "/board/voltage");
        assert_eq!(params.topics.output, "/board/temperature");
        assert_eq!(params.idle_period().unwrap(), Duration::from_millis(500));

        let config = params.estimator_config().unwrap();
        assert_eq!(config.theta, 0.01);
        assert_eq!(config.off_y, 5.0);
        assert_eq!(config.abcd.as_slice(), &[1.0e-6, -0.1, 2.0, 0.0]);
        assert_eq!(config.window_size, 61);
        assert_eq!(config.filter_order, 3);
    }

    #[test]
    fn test_sections_default() {
        let params = NodeParams::from_toml_str("theta = 0.0\noff_y = 0.0\nabcd = [1.0]").unwrap();
        assert_eq!(params.node.name, "volt_filt");
        assert_eq!(params.topics.input, "/power_board/voltage");
        assert_eq!(params.topics.output, "/power_board/temperature_estimate");
        assert_eq!(params.idle_period().unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn test_missing_parameters() {
        let missing_theta = NodeParams::from_toml_str("off_y = 0.0\nabcd = [1.0]").unwrap();
        assert!(matches!(
            missing_theta.estimator_config(),
            Err(Error::MissingParameter("theta"))
        ));

        let missing_off_y = NodeParams::from_toml_str("theta = 0.0\nabcd = [1.0]").unwrap();
        assert!(matches!(
            missing_off_y.estimator_config(),
            Err(Error::MissingParameter("off_y"))
        ));

        let missing_abcd = NodeParams::from_toml_str("theta = 0.0\noff_y = 0.0").unwrap();
        assert!(matches!(
            missing_abcd.estimator_config(),
            Err(Error::MissingParameter("abcd"))
        ));
    }

    #[test]
    fn test_empty_polynomial_is_rejected() {
        let params = NodeParams::from_toml_str("theta = 0.0\noff_y = 0.0\nabcd = []").unwrap();
        assert!(matches!(
            params.estimator_config(),
            Err(Error::Config(volt_filt::ConfigError::EmptyPolynomial))
        ));
    }

    #[test]
    fn test_invalid_idle_period() {
        let params = NodeParams::from_toml_str(
            "theta = 0.0\noff_y = 0.0\nabcd = [1.0]\n[node]\nidle_period_secs = 0.0",
        )
        .unwrap();
        assert!(matches!(
            params.idle_period(),
            Err(Error::InvalidParameter {
                name: "idle_period_secs",
                ..
            })
        ));
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let result = NodeParams::from_toml_str("theta = \"north\"\noff_y = 0.0\nabcd = [1.0]");
        assert!(matches!(result, Err(Error::Toml(_))));
    }
}
