//! Experiment configuration

use crate::error::{GaussError, Result};

/// Parameters of a density experiment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Cells per axis
    pub partitions: usize,
    /// Orbit points per cell (orbit length = partitions × iteration_rate)
    pub iteration_rate: usize,
    /// Independent orbits averaged
    pub experiments: usize,
    /// Initial points drawn before giving up on a collapsing map
    pub max_redo_attempts: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            partitions: 100,
            iteration_rate: 1000,
            experiments: 100,
            max_redo_attempts: 1000,
        }
    }
}

impl ExperimentConfig {
    /// Length of each sampled orbit
    ///
    /// Saturates; [`validate`](Self::validate) rejects overflowing products.
    pub fn iterations(&self) -> usize {
        self.partitions.saturating_mul(self.iteration_rate)
    }

    /// Width of one cell along an axis
    pub fn cell_width(&self) -> f64 {
        1.0 / self.partitions as f64
    }

    /// Reject configurations that would divide by zero or never sample
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("partitions", self.partitions),
            ("iteration_rate", self.iteration_rate),
            ("experiments", self.experiments),
            ("max_redo_attempts", self.max_redo_attempts),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(GaussError::InvalidConfig(format!("{} must be positive", name)));
            }
        }
        if self.partitions.checked_mul(self.iteration_rate).is_none() {
            return Err(GaussError::InvalidConfig(
                "partitions * iteration_rate overflows".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.iterations(), 100_000);
        assert!((config.cell_width() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_validate_rejects_zeros() {
        let config = ExperimentConfig {
            experiments: 0,
            ..ExperimentConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GaussError::InvalidConfig("experiments must be positive".into()))
        );
    }

    #[test]
    fn test_validate_rejects_overflowing_orbit_length() {
        let config = ExperimentConfig {
            partitions: usize::MAX / 2,
            iteration_rate: 3,
            ..ExperimentConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GaussError::InvalidConfig("partitions * iteration_rate overflows".into()))
        );
        assert_eq!(config.iterations(), usize::MAX);
    }
}
