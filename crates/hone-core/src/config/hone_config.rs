//! Top-level hone configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EscalationConfig, PatternConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`HONE_*`)
/// 2. Project config (`hone.toml` in project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HoneConfig {
    pub patterns: PatternConfig,
    pub escalation: EscalationConfig,
}

impl HoneConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("hone.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate threshold values.
    ///
    /// Pattern overrides are NOT validated here — the catalog applies
    /// them leniently, skipping bad entries with a warning. Threshold
    /// fields are hard errors because a nonsensical band layout would
    /// silently disable triage.
    pub fn validate(config: &HoneConfig) -> Result<(), ConfigError> {
        let esc = &config.escalation;
        for (field, value) in [
            ("escalation.comprehensive_above", esc.comprehensive_above),
            ("escalation.standard_floor", esc.standard_floor),
            ("escalation.intent_confidence_min", esc.intent_confidence_min),
            ("escalation.strong_recommend_above", esc.strong_recommend_above),
            ("escalation.suggest_above", esc.suggest_above),
            ("escalation.answer_floor", esc.answer_floor),
        ] {
            if let Some(v) = value {
                if v > 100 {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0 and 100".to_string(),
                    });
                }
            }
        }
        if esc.effective_suggest_above() > esc.effective_strong_recommend_above() {
            return Err(ConfigError::ValidationFailed {
                field: "escalation.suggest_above".to_string(),
                message: "must not exceed strong_recommend_above".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut HoneConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: HoneConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when present.
    fn merge(base: &mut HoneConfig, other: &HoneConfig) {
        if !other.patterns.disabled.is_empty() {
            base.patterns.disabled = other.patterns.disabled.clone();
        }
        if !other.patterns.priority_overrides.is_empty() {
            base.patterns.priority_overrides = other.patterns.priority_overrides.clone();
        }

        if other.escalation.comprehensive_above.is_some() {
            base.escalation.comprehensive_above = other.escalation.comprehensive_above;
        }
        if other.escalation.standard_floor.is_some() {
            base.escalation.standard_floor = other.escalation.standard_floor;
        }
        if other.escalation.intent_confidence_min.is_some() {
            base.escalation.intent_confidence_min = other.escalation.intent_confidence_min;
        }
        if other.escalation.strong_recommend_above.is_some() {
            base.escalation.strong_recommend_above = other.escalation.strong_recommend_above;
        }
        if other.escalation.suggest_above.is_some() {
            base.escalation.suggest_above = other.escalation.suggest_above;
        }
        if other.escalation.answer_floor.is_some() {
            base.escalation.answer_floor = other.escalation.answer_floor;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HONE_ESCALATION_SUGGEST_ABOVE`, `HONE_DISABLED_PATTERNS`, etc.
    fn apply_env_overrides(config: &mut HoneConfig) {
        if let Ok(val) = std::env::var("HONE_DISABLED_PATTERNS") {
            config.patterns.disabled = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(val) = std::env::var("HONE_ESCALATION_SUGGEST_ABOVE") {
            if let Ok(v) = val.parse::<u8>() {
                config.escalation.suggest_above = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HONE_ESCALATION_STRONG_RECOMMEND_ABOVE") {
            if let Ok(v) = val.parse::<u8>() {
                config.escalation.strong_recommend_above = Some(v);
            }
        }
        if let Ok(val) = std::env::var("HONE_ESCALATION_ANSWER_FLOOR") {
            if let Ok(v) = val.parse::<u8>() {
                config.escalation.answer_floor = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
