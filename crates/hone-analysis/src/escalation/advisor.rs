//! Escalation score aggregation and tiered recommendation.

use std::fmt;

use serde::{Deserialize, Serialize};

use hone_core::config::EscalationConfig;
use hone_core::types::IntentAnalysis;

use super::factors::{self, EscalationReason};
use crate::scoring::QualityMetrics;

/// How firmly the advisor stands behind its recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscalationConfidence {
    Low,
    Medium,
    High,
}

impl EscalationConfidence {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for EscalationConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The triage recommendation. Derived per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EscalationAnalysis {
    pub should_escalate: bool,
    pub escalation_score: u8,
    pub confidence: EscalationConfidence,
    pub reasons: Vec<EscalationReason>,
    pub comprehensive_value: String,
}

/// Combines intent and quality signals into an escalation
/// recommendation.
///
/// Triage always runs against the quality of the ORIGINAL text — the
/// recommendation must reflect what the user actually wrote, not the
/// rewritten prompt.
#[derive(Debug, Default)]
pub struct EscalationAdvisor {
    config: EscalationConfig,
}

impl EscalationAdvisor {
    pub fn new(config: EscalationConfig) -> Self {
        Self { config }
    }

    pub fn analyze(
        &self,
        intent: &IntentAnalysis,
        original_quality: &QualityMetrics,
        original_text: &str,
    ) -> EscalationAnalysis {
        // A confidently classified prompt above this overall quality
        // gains little from a comprehensive pass, whatever individual
        // factors would fire.
        if original_quality.overall >= self.config.effective_comprehensive_above()
            && intent.confidence >= self.config.effective_intent_confidence_min()
        {
            return EscalationAnalysis {
                should_escalate: false,
                escalation_score: 0,
                confidence: EscalationConfidence::Low,
                reasons: Vec::new(),
                comprehensive_value: comprehensive_value(&[]),
            };
        }

        let reasons = factors::evaluate(intent, original_quality, original_text, &self.config);

        let raw: u32 = reasons.iter().map(|r| r.contribution as u32).sum();
        let score = raw.min(100) as u8;

        let suggest = self.config.effective_suggest_above();
        let strong = self.config.effective_strong_recommend_above();
        let confidence = if score >= strong {
            EscalationConfidence::High
        } else if score >= suggest {
            EscalationConfidence::Medium
        } else {
            EscalationConfidence::Low
        };

        EscalationAnalysis {
            should_escalate: score >= suggest,
            escalation_score: score,
            confidence,
            comprehensive_value: comprehensive_value(&reasons),
            reasons,
        }
    }
}

/// Deterministic summary of what a comprehensive pass would add,
/// assembled from the fired factors' benefit phrases.
fn comprehensive_value(reasons: &[EscalationReason]) -> String {
    if reasons.is_empty() {
        return "Standard analysis is sufficient for this prompt.".to_string();
    }
    let phrases: Vec<&str> = reasons
        .iter()
        .map(|r| factors::benefit_phrase(r.factor))
        .collect();
    format!("Comprehensive analysis would help: {}.", phrases.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hone_core::types::{Intent, PromptCharacteristics};

    fn quality(overall: u8, completeness: u8, specificity: u8) -> QualityMetrics {
        QualityMetrics {
            clarity: 70,
            efficiency: 70,
            structure: 70,
            completeness,
            actionability: 70,
            specificity,
            overall,
            strengths: Vec::new(),
            improvements: Vec::new(),
        }
    }

    fn intent(primary: Intent, confidence: u8) -> IntentAnalysis {
        IntentAnalysis {
            primary_intent: primary,
            confidence,
            characteristics: PromptCharacteristics::default(),
        }
    }

    #[test]
    fn test_high_quality_prompt_not_escalated() {
        let advisor = EscalationAdvisor::default();
        let analysis = advisor.analyze(
            &intent(Intent::CodeGeneration, 90),
            &quality(85, 85, 85),
            "Create a login page with the existing form components in src/pages",
        );
        assert!(!analysis.should_escalate);
        assert_eq!(analysis.confidence, EscalationConfidence::Low);
        assert!(analysis.comprehensive_value.contains("sufficient"));
    }

    #[test]
    fn test_weak_prompt_escalates_with_reasons() {
        let advisor = EscalationAdvisor::default();
        let analysis = advisor.analyze(
            &intent(Intent::Migration, 20),
            &quality(30, 30, 30),
            "migrate the thing",
        );
        assert!(analysis.should_escalate);
        assert!(analysis.escalation_score >= 40);
        assert!(!analysis.reasons.is_empty());
        assert!(analysis.comprehensive_value.starts_with("Comprehensive"));
    }

    #[test]
    fn test_score_capped_at_100() {
        let advisor = EscalationAdvisor::default();
        let mut chars = PromptCharacteristics::default();
        chars.is_open_ended = true;
        chars.needs_structure = true;
        let intent = IntentAnalysis {
            primary_intent: Intent::Migration,
            confidence: 0,
            characteristics: chars,
        };
        let analysis = advisor.analyze(&intent, &quality(0, 0, 0), "x");
        assert!(analysis.escalation_score <= 100);
        assert!(analysis.should_escalate);
    }

    #[test]
    fn test_lower_completeness_never_lowers_score() {
        let advisor = EscalationAdvisor::default();
        let base_intent = intent(Intent::CodeGeneration, 80);
        let text = "Create a login page for the admin portal";

        let mut previous = 0u8;
        for completeness in (0..=100u8).rev().step_by(10) {
            let analysis =
                advisor.analyze(&base_intent, &quality(60, completeness, 70), text);
            assert!(
                analysis.escalation_score >= previous,
                "score decreased when completeness dropped to {completeness}"
            );
            previous = analysis.escalation_score;
        }
    }
}
