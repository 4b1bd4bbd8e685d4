//! Escalation triage thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds driving the escalation advisor and answer validation.
/// All values are 0–100 scores.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EscalationConfig {
    /// Overall quality above which comprehensive analysis adds little.
    /// Default: 70.
    pub comprehensive_above: Option<u8>,
    /// Overall quality below which the quality factor contributes.
    /// Default: 40.
    pub standard_floor: Option<u8>,
    /// Classifier confidence below which the low-confidence factor
    /// contributes. Default: 60.
    pub intent_confidence_min: Option<u8>,
    /// Escalation score at or above which the recommendation is strong.
    /// Default: 65.
    pub strong_recommend_above: Option<u8>,
    /// Escalation score at or above which escalation is suggested.
    /// Default: 40.
    pub suggest_above: Option<u8>,
    /// Answer-validation floor: answers scoring below this overall get a
    /// soft clarification suggestion. Default: 50.
    pub answer_floor: Option<u8>,
}

impl EscalationConfig {
    pub fn effective_comprehensive_above(&self) -> u8 {
        self.comprehensive_above.unwrap_or(70)
    }

    pub fn effective_standard_floor(&self) -> u8 {
        self.standard_floor.unwrap_or(40)
    }

    pub fn effective_intent_confidence_min(&self) -> u8 {
        self.intent_confidence_min.unwrap_or(60)
    }

    pub fn effective_strong_recommend_above(&self) -> u8 {
        self.strong_recommend_above.unwrap_or(65)
    }

    pub fn effective_suggest_above(&self) -> u8 {
        self.suggest_above.unwrap_or(40)
    }

    pub fn effective_answer_floor(&self) -> u8 {
        self.answer_floor.unwrap_or(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let cfg = EscalationConfig::default();
        assert_eq!(cfg.effective_comprehensive_above(), 70);
        assert_eq!(cfg.effective_standard_floor(), 40);
        assert_eq!(cfg.effective_intent_confidence_min(), 60);
        assert_eq!(cfg.effective_strong_recommend_above(), 65);
        assert_eq!(cfg.effective_suggest_above(), 40);
        assert_eq!(cfg.effective_answer_floor(), 50);
    }
}
