use serde::{Deserialize, Serialize};

use crate::error::TrainingError;

fn default_target_minutes() -> f64 {
    10.0
}

fn default_confidence_cap() -> u8 {
    95
}

fn default_upload_confidence_delta() -> u8 {
    10
}

fn default_call_confidence_delta() -> u8 {
    15
}

fn default_upload_title_prefix() -> String {
    "Загруженная запись".to_string()
}

/// Tunables of the training engine. Fixed for a session's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Cumulative minutes needed to complete training. Default: 10.0.
    #[serde(default = "default_target_minutes")]
    pub target_minutes: f64,
    /// Upper bound of the confidence score. Default: 95.
    #[serde(default = "default_confidence_cap")]
    pub confidence_cap: u8,
    /// Confidence gained per upload batch (not per file). Default: 10.
    #[serde(default = "default_upload_confidence_delta")]
    pub upload_confidence_delta: u8,
    /// Confidence gained per finished call. Default: 15.
    #[serde(default = "default_call_confidence_delta")]
    pub call_confidence_delta: u8,
    /// Title prefix of uploaded recordings, followed by their ordinal.
    #[serde(default = "default_upload_title_prefix")]
    pub upload_title_prefix: String,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            target_minutes: default_target_minutes(),
            confidence_cap: default_confidence_cap(),
            upload_confidence_delta: default_upload_confidence_delta(),
            call_confidence_delta: default_call_confidence_delta(),
            upload_title_prefix: default_upload_title_prefix(),
        }
    }
}

impl TrainingConfig {
    /// Checks that the configuration describes a reachable target.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::InvalidConfig` if the target is not a positive
    /// finite number or the confidence cap exceeds 100.
    pub fn validate(&self) -> Result<(), TrainingError> {
        if !self.target_minutes.is_finite() || self.target_minutes <= 0.0 {
            return Err(TrainingError::InvalidConfig(format!(
                "target_minutes must be a positive number, got {}",
                self.target_minutes
            )));
        }
        if self.confidence_cap > 100 {
            return Err(TrainingError::InvalidConfig(format!(
                "confidence_cap must be at most 100, got {}",
                self.confidence_cap
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = TrainingConfig::default();
        assert_eq!(config.target_minutes, 10.0);
        assert_eq!(config.confidence_cap, 95);
        assert_eq!(config.upload_confidence_delta, 10);
        assert_eq!(config.call_confidence_delta, 15);
        assert_eq!(config.upload_title_prefix, "Загруженная запись");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: TrainingConfig = toml::from_str("target_minutes = 3.5").unwrap();
        assert_eq!(config.target_minutes, 3.5);
        assert_eq!(config.confidence_cap, 95);

        let config: TrainingConfig = toml::from_str("").unwrap();
        assert_eq!(config, TrainingConfig::default());
    }

    #[test]
    fn rejects_unreachable_target() {
        for target in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = TrainingConfig {
                target_minutes: target,
                ..TrainingConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(TrainingError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn rejects_cap_above_one_hundred() {
        let config = TrainingConfig {
            confidence_cap: 101,
            ..TrainingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
