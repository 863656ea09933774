// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Classifier configuration.
//!
//! This module defines the [`ClassifierConfig`] struct, which holds the posture policy:
//! the keypoint confidence gate, the elbow angle thresholds and which arm to examine.

use crate::error::{PoseError, Result};
use crate::keypoint::Arm;

/// Minimum keypoint confidence before an arm is assessed.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Elbow angle (degrees) above which the arm counts as over-extended.
pub const DEFAULT_OVER_REACH_DEG: f32 = 160.0;

/// Elbow angle (degrees) below which the arm counts as an acute flexion.
pub const DEFAULT_TIGHT_GRIP_DEG: f32 = 50.0;

/// Configuration for posture classification.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use safepose::{Arm, ClassifierConfig};
///
/// let config = ClassifierConfig::new()
///     .with_min_confidence(0.6)
///     .with_over_reach(165.0)
///     .with_tight_grip(45.0)
///     .with_arm(Arm::Left);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Each arm keypoint must reach this confidence (0.0 to 1.0).
    /// Below it the classifier reports that it is still analyzing.
    pub min_confidence: f32,
    /// Angles strictly above this are over-reach.
    pub over_reach_deg: f32,
    /// Angles strictly below this are tight grip.
    pub tight_grip_deg: f32,
    /// Arm to examine.
    pub arm: Arm,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            over_reach_deg: DEFAULT_OVER_REACH_DEG,
            tight_grip_deg: DEFAULT_TIGHT_GRIP_DEG,
            arm: Arm::Right,
        }
    }
}

impl ClassifierConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keypoint confidence gate.
    ///
    /// # Arguments
    ///
    /// * `threshold` - The minimum confidence score (0.0 to 1.0).
    ///
    /// # Returns
    ///
    /// * The modified `ClassifierConfig`.
    #[must_use]
    pub const fn with_min_confidence(mut self, threshold: f32) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Set the over-reach threshold in degrees.
    #[must_use]
    pub const fn with_over_reach(mut self, degrees: f32) -> Self {
        self.over_reach_deg = degrees;
        self
    }

    /// Set the tight-grip threshold in degrees.
    #[must_use]
    pub const fn with_tight_grip(mut self, degrees: f32) -> Self {
        self.tight_grip_deg = degrees;
        self
    }

    /// Select the arm to examine.
    #[must_use]
    pub const fn with_arm(mut self, arm: Arm) -> Self {
        self.arm = arm;
        self
    }

    /// Check that the thresholds describe a usable policy.
    ///
    /// # Errors
    ///
    /// Returns [`PoseError::ConfigError`] if the confidence is outside `[0, 1]`, an angle
    /// is outside `[0, 180]`, or the tight-grip threshold is not below the over-reach one.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(PoseError::ConfigError(format!(
                "min confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        for (name, value) in [
            ("over-reach", self.over_reach_deg),
            ("tight-grip", self.tight_grip_deg),
        ] {
            if !(0.0..=180.0).contains(&value) {
                return Err(PoseError::ConfigError(format!(
                    "{name} threshold must be within [0, 180] degrees, got {value}"
                )));
            }
        }
        if self.tight_grip_deg >= self.over_reach_deg {
            return Err(PoseError::ConfigError(format!(
                "tight-grip threshold ({}) must be below over-reach threshold ({})",
                self.tight_grip_deg, self.over_reach_deg
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClassifierConfig::default();
        assert!((config.min_confidence - 0.5).abs() < f32::EPSILON);
        assert!((config.over_reach_deg - 160.0).abs() < f32::EPSILON);
        assert!((config.tight_grip_deg - 50.0).abs() < f32::EPSILON);
        assert_eq!(config.arm, Arm::Right);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ClassifierConfig::new()
            .with_min_confidence(0.7)
            .with_over_reach(150.0)
            .with_tight_grip(40.0)
            .with_arm(Arm::Left);

        assert!((config.min_confidence - 0.7).abs() < f32::EPSILON);
        assert!((config.over_reach_deg - 150.0).abs() < f32::EPSILON);
        assert!((config.tight_grip_deg - 40.0).abs() < f32::EPSILON);
        assert_eq!(config.arm, Arm::Left);
    }

    #[test]
    fn test_config_validation() {
        assert!(ClassifierConfig::new().with_min_confidence(1.5).validate().is_err());
        assert!(ClassifierConfig::new().with_min_confidence(f32::NAN).validate().is_err());
        assert!(ClassifierConfig::new().with_over_reach(200.0).validate().is_err());
        assert!(ClassifierConfig::new().with_tight_grip(-1.0).validate().is_err());
        assert!(
            ClassifierConfig::new()
                .with_tight_grip(120.0)
                .with_over_reach(100.0)
                .validate()
                .is_err()
        );
    }
}
