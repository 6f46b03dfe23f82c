use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Runtime settings for an [`ActionManager`](crate::ActionManager).
/// Usually built in code; can also be loaded from a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// Reset completed top-level actions and keep them in the pool (default: true).
    pub pool_completed: bool,
    /// Maximum pooled shells kept per action kind (default: 64).
    pub pool_capacity: usize,
    /// Cap on the frame delta fed to actions, in seconds (default: 0.25).
    /// Stops a long stall from skipping whole animations in one step.
    pub max_delta: Option<f32>,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            pool_completed: true,
            pool_capacity: 64,
            max_delta: Some(0.25),
        }
    }
}

impl ActionConfig {
    /// Parse and validate a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ActionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_delta {
            if !max.is_finite() || max <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "max_delta must be a positive number of seconds, got {max}"
                )));
            }
        }
        Ok(())
    }

    /// Apply the delta cap. Non-finite deltas become 0; a cap that fails
    /// `validate` is ignored.
    pub fn clamp_delta(&self, dt: f32) -> f32 {
        if !dt.is_finite() {
            return 0.0;
        }
        match self.max_delta {
            Some(max) if max > 0.0 => dt.min(max),
            _ => dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let config = ActionConfig::from_json(r#"{ "pool_capacity": 8 }"#).unwrap();
        assert_eq!(config.pool_capacity, 8);
        assert!(config.pool_completed);
        assert_eq!(config.max_delta, Some(0.25));
    }

    #[test]
    fn parse_disabled_delta_cap() {
        let config = ActionConfig::from_json(r#"{ "max_delta": null, "pool_completed": false }"#).unwrap();
        assert_eq!(config.max_delta, None);
        assert!(!config.pool_completed);
        assert_eq!(config.clamp_delta(10.0), 10.0);
    }

    #[test]
    fn rejects_non_positive_delta_cap() {
        let err = ActionConfig::from_json(r#"{ "max_delta": 0.0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn non_finite_delta_is_zero() {
        let config = ActionConfig::default();
        assert_eq!(config.clamp_delta(f32::NAN), 0.0);
        assert_eq!(config.clamp_delta(f32::INFINITY), 0.0);
        assert_eq!(config.clamp_delta(0.1), 0.1);
        assert_eq!(config.clamp_delta(1.0), 0.25);
    }

    #[test]
    fn invalid_cap_is_ignored_when_clamping() {
        let config = ActionConfig {
            max_delta: Some(-1.0),
            ..ActionConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.clamp_delta(0.1), 0.1);
    }

    #[test]
    fn reports_malformed_json() {
        let err = ActionConfig::from_json("{ pool_capacity: ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
