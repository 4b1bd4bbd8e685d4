//! Actionability rules — imperative openings, verification, deliverables.

use hone_core::errors::ApplyError;
use hone_core::types::{Dimension, Impact, Intent, PatternScope};

use crate::patterns::traits::RewriteRule;
use crate::patterns::types::{ApplyContext, Improvement, PatternOutcome};
use crate::text::signals;

pub struct ImperativeOpening;

impl RewriteRule for ImperativeOpening {
    fn id(&self) -> &'static str {
        "imperative-opening"
    }
    fn name(&self) -> &'static str {
        "Imperative opening"
    }
    fn description(&self) -> &'static str {
        "Labels a non-imperative prompt as a task"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        6
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &Intent::ALL
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        if signals::starts_imperative(text)
            || text.starts_with("Task:")
            || text.starts_with("Goal:")
            || text.starts_with('#')
        {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            format!("Task: {text}"),
            Improvement {
                dimension: Dimension::Actionability,
                description: "Labeled the request as a task".to_string(),
                impact: Impact::Low,
            },
        ))
    }
}

pub struct AddVerificationStep;

impl RewriteRule for AddVerificationStep {
    fn id(&self) -> &'static str {
        "add-verification-step"
    }
    fn name(&self) -> &'static str {
        "Add verification step"
    }
    fn description(&self) -> &'static str {
        "Asks for a concrete way to check the result"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        5
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[
            Intent::CodeGeneration,
            Intent::Debugging,
            Intent::Testing,
            Intent::Refinement,
        ]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let lower = text.to_lowercase();
        if lower.contains("verify") || lower.contains("validate") || lower.contains("check") {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            format!(
                "{text}\n\nVerification: state how the result will be checked (command to run, test suite, or observable behavior)."
            ),
            Improvement {
                dimension: Dimension::Actionability,
                description: "Added a verification step".to_string(),
                impact: Impact::Medium,
            },
        ))
    }
}

pub struct SpecifyDeliverable;

impl RewriteRule for SpecifyDeliverable {
    fn id(&self) -> &'static str {
        "specify-deliverable"
    }
    fn name(&self) -> &'static str {
        "Specify deliverable"
    }
    fn description(&self) -> &'static str {
        "Asks document-producing prompts for format, length, and audience"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        6
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[
            Intent::Documentation,
            Intent::Summarization,
            Intent::RequirementsGeneration,
            Intent::Planning,
        ]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let lower = text.to_lowercase();
        if lower.contains("format") || lower.contains("deliverable") {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            format!(
                "{text}\n\nDeliverable: name the expected output format, target length, and audience."
            ),
            Improvement {
                dimension: Dimension::Actionability,
                description: "Specified the expected deliverable".to_string(),
                impact: Impact::Medium,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hone_core::types::{DepthLevel, IntentAnalysis, Mode};

    fn ctx_with<'a>(intent: &'a IntentAnalysis, original: &'a str) -> ApplyContext<'a> {
        ApplyContext {
            intent,
            mode: Mode::Improve,
            depth: DepthLevel::Standard,
            phase: None,
            original,
        }
    }

    #[test]
    fn test_non_imperative_gets_task_label() {
        let intent = IntentAnalysis::fallback();
        let text = "The dashboard needs a dark mode";
        let ctx = ctx_with(&intent, text);

        let out = ImperativeOpening.apply(text, &ctx).unwrap();
        assert!(out.applied);
        assert!(out.text.starts_with("Task: "));
    }

    #[test]
    fn test_imperative_untouched() {
        let intent = IntentAnalysis::fallback();
        let text = "Add a dark mode to the dashboard";
        let ctx = ctx_with(&intent, text);
        assert!(!ImperativeOpening.apply(text, &ctx).unwrap().applied);
    }
}
