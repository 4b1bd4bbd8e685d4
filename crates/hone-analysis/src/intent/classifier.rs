//! Intent classification from surface text features.

use hone_core::types::{Intent, IntentAnalysis, PromptCharacteristics};

use super::lexicon::{intent_index, IntentLexicon};
use crate::text::{signals, TextFeatures};

/// Words that open a broad question.
const QUESTION_OPENERS: &[&str] = &[
    "how", "what", "why", "should", "could", "can", "would", "is", "are", "which",
];

/// Classifies a prompt into one of the closed intent categories.
///
/// Total function: always returns a well-formed result, including for
/// empty input (which yields the fallback intent with zero confidence).
#[derive(Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> IntentAnalysis {
        if text.trim().is_empty() {
            return IntentAnalysis::fallback();
        }

        let features = TextFeatures::extract(text);
        let mut scores = IntentLexicon::global().scores(text);
        apply_context_bonuses(&mut scores, &features);

        // First-declared intent wins ties, so the most general category
        // comes out ahead when nothing distinguishes the candidates.
        let mut best_idx = 0;
        let mut best_score = scores[0];
        for (idx, &score) in scores.iter().enumerate().skip(1) {
            if score > best_score {
                best_idx = idx;
                best_score = score;
            }
        }

        let primary_intent = if best_score == 0 {
            Intent::CodeGeneration
        } else {
            Intent::ALL[best_idx]
        };

        IntentAnalysis {
            primary_intent,
            confidence: normalize_confidence(best_score),
            characteristics: derive_characteristics(text, &features),
        }
    }
}

/// Contextual bonuses on top of lexicon hits.
fn apply_context_bonuses(scores: &mut [u32; 11], features: &TextFeatures) {
    if features.has_code_fence || features.has_inline_code {
        for intent in [
            Intent::CodeGeneration,
            Intent::Debugging,
            Intent::Refinement,
            Intent::Testing,
        ] {
            scores[intent_index(intent)] += 3;
        }
    }
    if features.question_density() >= 0.5 || features.question_marks >= 2 {
        scores[intent_index(Intent::Learning)] += 3;
    }
    if features.word_count > 150 {
        scores[intent_index(Intent::Planning)] += 2;
        scores[intent_index(Intent::RequirementsGeneration)] += 2;
    }
}

/// Saturating ramp: 0 stays 0, moderate evidence lands mid-range, and
/// the result approaches (never reaches) 100.
fn normalize_confidence(score: u32) -> u8 {
    let normalized = (score as f64 / (score as f64 + 10.0)) * 100.0;
    normalized.round().clamp(0.0, 100.0) as u8
}

fn derive_characteristics(text: &str, features: &TextFeatures) -> PromptCharacteristics {
    let first_word_is_question = text
        .split_whitespace()
        .next()
        .map(|w| {
            QUESTION_OPENERS
                .iter()
                .any(|q| q.eq_ignore_ascii_case(w.trim_end_matches(|c: char| !c.is_ascii_alphabetic())))
        })
        .unwrap_or(false);

    PromptCharacteristics {
        has_code_context: features.has_code_fence
            || features.has_inline_code
            || !features.path_tokens.is_empty(),
        has_technical_terms: signals::has_technical_terms(text),
        is_open_ended: features.question_marks > 0 || first_word_is_question,
        needs_structure: features.word_count > 80
            && features.header_count == 0
            && features.bullet_count == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_generation_prompt() {
        let analysis = IntentClassifier::new().classify("Create a login page");
        assert_eq!(analysis.primary_intent, Intent::CodeGeneration);
        assert!(analysis.confidence > 0);
    }

    #[test]
    fn test_debugging_prompt() {
        let analysis = IntentClassifier::new()
            .classify("The checkout flow is broken, fix the crash in payment.ts");
        assert_eq!(analysis.primary_intent, Intent::Debugging);
        assert!(analysis.characteristics.has_code_context);
    }

    #[test]
    fn test_learning_prompt_is_open_ended() {
        let analysis =
            IntentClassifier::new().classify("How does connection pooling work? What is a pool?");
        assert_eq!(analysis.primary_intent, Intent::Learning);
        assert!(analysis.characteristics.is_open_ended);
    }

    #[test]
    fn test_empty_input_returns_fallback() {
        let analysis = IntentClassifier::new().classify("");
        assert_eq!(analysis, IntentAnalysis::fallback());
    }

    #[test]
    fn test_unrecognizable_input_defaults_to_code_generation() {
        let analysis = IntentClassifier::new().classify("lorem ipsum dolor sit amet");
        assert_eq!(analysis.primary_intent, Intent::CodeGeneration);
        assert_eq!(analysis.confidence, 0);
    }

    #[test]
    fn test_confidence_normalization_monotone() {
        assert_eq!(normalize_confidence(0), 0);
        assert!(normalize_confidence(5) < normalize_confidence(20));
        assert!(normalize_confidence(1000) <= 100);
    }
}
