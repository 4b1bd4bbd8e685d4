//! The additive escalation factors, each capped.

use serde::Serialize;

use hone_core::config::EscalationConfig;
use hone_core::types::{Intent, IntentAnalysis};

use crate::scoring::QualityMetrics;
use crate::text::TextFeatures;

/// Intents that routinely benefit from a deeper analysis pass.
const DEEP_BENEFIT_INTENTS: &[Intent] = &[
    Intent::Planning,
    Intent::Migration,
    Intent::SecurityReview,
    Intent::RequirementsGeneration,
    Intent::Debugging,
];

const INTENT_TYPE_BONUS: u8 = 20;
const LOW_CONFIDENCE_CAP: u8 = 15;
const LOW_QUALITY_CAP: u8 = 25;
const LOW_COMPLETENESS_BONUS: u8 = 10;
const LOW_SPECIFICITY_BONUS: u8 = 10;
const HIGH_AMBIGUITY_BONUS: u8 = 15;
const SHORT_TEXT_BONUS: u8 = 10;
const COMPLEX_INTENT_BONUS: u8 = 10;

/// Completeness/specificity level below which the flat bonuses fire.
const LOW_DIMENSION_FLOOR: u8 = 50;
/// Word count under which a prompt counts as short.
const SHORT_TEXT_WORDS: usize = 20;
/// Completeness level under which a short prompt is suspicious.
const SHORT_TEXT_COMPLETENESS: u8 = 60;

/// One factor that contributed to the escalation score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EscalationReason {
    pub factor: &'static str,
    pub contribution: u8,
    pub description: String,
}

/// The benefit phrase keyed off a fired factor, used to assemble the
/// comprehensive-value summary.
pub(crate) fn benefit_phrase(factor: &str) -> &'static str {
    match factor {
        "intent-type" => "this intent class routinely benefits from deeper requirement elicitation",
        "low-confidence" => "clarifying questions would pin down the actual intent",
        "low-quality" => "a comprehensive pass would lift the overall prompt quality",
        "low-completeness" => "missing context would be surfaced before work starts",
        "low-specificity" => "concrete targets and names would replace vague wording",
        "high-ambiguity" => "an open-ended request this unstructured needs decomposition",
        "short-text" => "a short underspecified prompt leaves too much to inference",
        "complex-intent" => "multi-system work profits from upfront analysis",
        _ => "deeper analysis would help",
    }
}

/// Evaluate all eight factors against the ORIGINAL prompt's quality.
pub fn evaluate(
    intent: &IntentAnalysis,
    quality: &QualityMetrics,
    original_text: &str,
    config: &EscalationConfig,
) -> Vec<EscalationReason> {
    let features = TextFeatures::extract(original_text);
    let mut reasons = Vec::new();

    if DEEP_BENEFIT_INTENTS.contains(&intent.primary_intent) {
        reasons.push(EscalationReason {
            factor: "intent-type",
            contribution: INTENT_TYPE_BONUS,
            description: format!(
                "{} prompts gain from comprehensive analysis",
                intent.primary_intent
            ),
        });
    }

    let confidence_min = config.effective_intent_confidence_min();
    if intent.confidence < confidence_min {
        let margin = confidence_min - intent.confidence;
        let contribution = (margin / 3).min(LOW_CONFIDENCE_CAP);
        if contribution > 0 {
            reasons.push(EscalationReason {
                factor: "low-confidence",
                contribution,
                description: format!(
                    "intent confidence {} is below the {} threshold",
                    intent.confidence, confidence_min
                ),
            });
        }
    }

    let floor = config.effective_standard_floor();
    if quality.overall < floor {
        let contribution = (floor - quality.overall).min(LOW_QUALITY_CAP);
        reasons.push(EscalationReason {
            factor: "low-quality",
            contribution,
            description: format!(
                "overall quality {} is below the {} floor",
                quality.overall, floor
            ),
        });
    }

    if quality.completeness < LOW_DIMENSION_FLOOR {
        reasons.push(EscalationReason {
            factor: "low-completeness",
            contribution: LOW_COMPLETENESS_BONUS,
            description: format!("completeness is low ({})", quality.completeness),
        });
    }

    if quality.specificity < LOW_DIMENSION_FLOOR {
        reasons.push(EscalationReason {
            factor: "low-specificity",
            contribution: LOW_SPECIFICITY_BONUS,
            description: format!("specificity is low ({})", quality.specificity),
        });
    }

    if intent.characteristics.is_open_ended && intent.characteristics.needs_structure {
        reasons.push(EscalationReason {
            factor: "high-ambiguity",
            contribution: HIGH_AMBIGUITY_BONUS,
            description: "the prompt is open-ended and unstructured at once".to_string(),
        });
    }

    if features.word_count < SHORT_TEXT_WORDS && quality.completeness < SHORT_TEXT_COMPLETENESS {
        reasons.push(EscalationReason {
            factor: "short-text",
            contribution: SHORT_TEXT_BONUS,
            description: format!(
                "only {} words with low completeness",
                features.word_count
            ),
        });
    }

    if intent.primary_intent.is_complex() {
        reasons.push(EscalationReason {
            factor: "complex-intent",
            contribution: COMPLEX_INTENT_BONUS,
            description: format!("{} spans multiple subsystems", intent.primary_intent),
        });
    }

    reasons
}
