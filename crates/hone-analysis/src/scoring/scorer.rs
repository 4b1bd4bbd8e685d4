//! Quality metric aggregation.

use serde::{Deserialize, Serialize};

use hone_core::types::IntentAnalysis;

use super::dimensions;
use super::weights::DimensionWeights;
use crate::text::TextFeatures;

/// Dimension score at or above which the dimension counts as a
/// strength.
const STRENGTH_THRESHOLD: u8 = 85;

/// The six dimension scores plus the weighted overall, with derived
/// strength and improvement summaries. Computed once per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub clarity: u8,
    pub efficiency: u8,
    pub structure: u8,
    pub completeness: u8,
    pub actionability: u8,
    pub specificity: u8,
    pub overall: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Scores a text against the six quality dimensions.
#[derive(Debug, Default)]
pub struct QualityScorer;

impl QualityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a text. `improvements` is left empty here; the orchestrator
    /// fills it by comparing original and enhanced text.
    pub fn score(&self, text: &str, intent: &IntentAnalysis) -> QualityMetrics {
        let features = TextFeatures::extract(text);

        let clarity = dimensions::score_clarity(text, &features, intent);
        let efficiency = dimensions::score_efficiency(text, &features, intent);
        let structure = dimensions::score_structure(text, &features, intent);
        let completeness = dimensions::score_completeness(text, &features, intent);
        let actionability = dimensions::score_actionability(text, &features, intent);
        let specificity = dimensions::score_specificity(text, &features, intent);

        let scores = [
            clarity,
            efficiency,
            structure,
            completeness,
            actionability,
            specificity,
        ];
        let overall = DimensionWeights::for_intent(intent.primary_intent).overall(scores);

        QualityMetrics {
            clarity,
            efficiency,
            structure,
            completeness,
            actionability,
            specificity,
            overall,
            strengths: derive_strengths(scores),
            improvements: Vec::new(),
        }
    }

    /// Human-readable summary of what changed between the original and
    /// the enhanced text. Deterministic.
    pub fn describe_improvements(original: &str, enhanced: &str) -> Vec<String> {
        let mut improvements = Vec::new();

        if !original.is_empty() && enhanced.len() > original.len() {
            let growth = ((enhanced.len() - original.len()) * 100) / original.len();
            if growth >= 20 {
                improvements.push(format!("Expanded the prompt with {growth}% more detail"));
            }
        }

        let before = TextFeatures::extract(original);
        let after = TextFeatures::extract(enhanced);

        if after.header_count > before.header_count {
            let added = after.header_count - before.header_count;
            improvements.push(format!("Introduced {added} section header(s)"));
        }
        if after.bullet_count > before.bullet_count {
            let added = after.bullet_count - before.bullet_count;
            improvements.push(format!("Added {added} checklist item(s)"));
        }

        improvements
    }
}

fn derive_strengths(scores: [u8; 6]) -> Vec<String> {
    const LABELS: [&str; 6] = [
        "Clear, unambiguous language",
        "Dense, low-noise phrasing",
        "Well-structured request",
        "Covers the necessary context",
        "Directly actionable",
        "Concrete and specific",
    ];
    scores
        .iter()
        .zip(LABELS)
        .filter(|(score, _)| **score >= STRENGTH_THRESHOLD)
        .map(|(_, label)| label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_well_formed() {
        let metrics = QualityScorer::new().score("", &IntentAnalysis::fallback());
        for score in [
            metrics.clarity,
            metrics.efficiency,
            metrics.structure,
            metrics.completeness,
            metrics.actionability,
            metrics.specificity,
            metrics.overall,
        ] {
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_strengths_only_above_threshold() {
        let strengths = derive_strengths([90, 50, 85, 84, 100, 10]);
        assert_eq!(
            strengths,
            vec![
                "Clear, unambiguous language",
                "Well-structured request",
                "Directly actionable"
            ]
        );
    }

    #[test]
    fn test_describe_improvements_reports_growth_and_headers() {
        let original = "Create a login page";
        let enhanced = "## Objective\nCreate a login page\n\n## Details\n- use the existing form components\n- cover error states";
        let improvements = QualityScorer::describe_improvements(original, enhanced);
        assert!(improvements.iter().any(|i| i.contains("more detail")));
        assert!(improvements.iter().any(|i| i.contains("section header")));
        assert!(improvements.iter().any(|i| i.contains("checklist item")));
    }

    #[test]
    fn test_describe_improvements_empty_for_unchanged() {
        assert!(QualityScorer::describe_improvements("same text", "same text").is_empty());
    }
}
