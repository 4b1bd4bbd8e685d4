//! Completeness rules — missing context, error handling, reproduction
//! details, constraints, acceptance criteria.

use hone_core::errors::ApplyError;
use hone_core::types::{Dimension, Impact, Intent, PatternScope, Phase, PhaseSet};

use crate::patterns::traits::RewriteRule;
use crate::patterns::types::{ApplyContext, Improvement, PatternOutcome};

fn append_block(text: &str, block: &str) -> String {
    format!("{text}\n\n{block}")
}

pub struct RequestCodeContext;

impl RewriteRule for RequestCodeContext {
    fn id(&self) -> &'static str {
        "request-code-context"
    }
    fn name(&self) -> &'static str {
        "Request code context"
    }
    fn description(&self) -> &'static str {
        "Asks for file paths and versions when the prompt has no code context"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        7
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[
            Intent::CodeGeneration,
            Intent::Debugging,
            Intent::Refinement,
            Intent::Testing,
            Intent::Migration,
        ]
    }

    fn apply(&self, text: &str, ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        if ctx.intent.characteristics.has_code_context || text.contains("Context to provide:") {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            append_block(
                text,
                "Context to provide: relevant file paths, language and framework versions, and any existing code the change must integrate with.",
            ),
            Improvement {
                dimension: Dimension::Completeness,
                description: "Requested the missing code context".to_string(),
                impact: Impact::High,
            },
        ))
    }
}

pub struct RequireErrorHandling;

impl RewriteRule for RequireErrorHandling {
    fn id(&self) -> &'static str {
        "require-error-handling"
    }
    fn name(&self) -> &'static str {
        "Require error handling"
    }
    fn description(&self) -> &'static str {
        "Adds an explicit failure-path requirement to generation prompts"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        5
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[Intent::CodeGeneration]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let lower = text.to_lowercase();
        if lower.contains("error") || lower.contains("failure") {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            append_block(
                text,
                "Handle failure paths explicitly: invalid input, timeouts, and empty results need defined behavior.",
            ),
            Improvement {
                dimension: Dimension::Completeness,
                description: "Added a failure-path requirement".to_string(),
                impact: Impact::Medium,
            },
        ))
    }
}

pub struct RequestReproSteps;

impl RewriteRule for RequestReproSteps {
    fn id(&self) -> &'static str {
        "request-repro-steps"
    }
    fn name(&self) -> &'static str {
        "Request reproduction steps"
    }
    fn description(&self) -> &'static str {
        "Asks debugging prompts for reproduction details and expected behavior"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        7
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[Intent::Debugging]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let lower = text.to_lowercase();
        if lower.contains("reproduce") || lower.contains("steps") {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            append_block(
                text,
                "Include reproduction details: exact steps, expected vs. actual behavior, and the full error output or stack trace.",
            ),
            Improvement {
                dimension: Dimension::Completeness,
                description: "Requested reproduction details".to_string(),
                impact: Impact::High,
            },
        ))
    }
}

pub struct AddConstraintsSection;

impl RewriteRule for AddConstraintsSection {
    fn id(&self) -> &'static str {
        "add-constraints-section"
    }
    fn name(&self) -> &'static str {
        "Add constraints section"
    }
    fn description(&self) -> &'static str {
        "Adds constraints and non-goals sections to planning-class prompts"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        6
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[
            Intent::Planning,
            Intent::Migration,
            Intent::RequirementsGeneration,
        ]
    }
    fn phases(&self) -> PhaseSet {
        PhaseSet::Only(&[Phase::Discovery, Phase::Requirements, Phase::Architecture])
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        if text.to_lowercase().contains("constraint") {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            append_block(
                text,
                "## Constraints\n- Deadlines, compatibility requirements, and systems that must not change\n\n## Non-goals\n- What is explicitly out of scope",
            ),
            Improvement {
                dimension: Dimension::Completeness,
                description: "Added constraints and non-goals sections".to_string(),
                impact: Impact::Medium,
            },
        ))
    }
}

pub struct AddAcceptanceCriteria;

impl RewriteRule for AddAcceptanceCriteria {
    fn id(&self) -> &'static str {
        "add-acceptance-criteria"
    }
    fn name(&self) -> &'static str {
        "Add acceptance criteria"
    }
    fn description(&self) -> &'static str {
        "Appends an acceptance criteria skeleton"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        6
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[
            Intent::CodeGeneration,
            Intent::Testing,
            Intent::RequirementsGeneration,
        ]
    }
    fn phases(&self) -> PhaseSet {
        PhaseSet::Only(&[
            Phase::Requirements,
            Phase::Implementation,
            Phase::Verification,
        ])
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        if text.to_lowercase().contains("acceptance criteria") {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            append_block(
                text,
                "## Acceptance criteria\n- The described behavior works end to end\n- Edge cases and failure paths are handled\n- Existing behavior does not regress",
            ),
            Improvement {
                dimension: Dimension::Completeness,
                description: "Added an acceptance criteria skeleton".to_string(),
                impact: Impact::Medium,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hone_core::types::{DepthLevel, IntentAnalysis, Mode, PromptCharacteristics};

    fn intent_without_context() -> IntentAnalysis {
        IntentAnalysis {
            primary_intent: Intent::CodeGeneration,
            confidence: 50,
            characteristics: PromptCharacteristics::default(),
        }
    }

    #[test]
    fn test_missing_context_requested() {
        let intent = intent_without_context();
        let text = "Create a login page";
        let ctx = ApplyContext {
            intent: &intent,
            mode: Mode::Improve,
            depth: DepthLevel::Standard,
            phase: None,
            original: text,
        };

        let out = RequestCodeContext.apply(text, &ctx).unwrap();
        assert!(out.applied);
        assert!(out.text.contains("Context to provide:"));
    }

    #[test]
    fn test_present_context_not_requested() {
        let mut intent = intent_without_context();
        intent.characteristics.has_code_context = true;
        let text = "Create a login page in src/pages/login.tsx";
        let ctx = ApplyContext {
            intent: &intent,
            mode: Mode::Improve,
            depth: DepthLevel::Standard,
            phase: None,
            original: text,
        };

        assert!(!RequestCodeContext.apply(text, &ctx).unwrap().applied);
    }

    #[test]
    fn test_error_handling_requirement_skipped_when_mentioned() {
        let intent = intent_without_context();
        let text = "Create a parser and report errors precisely";
        let ctx = ApplyContext {
            intent: &intent,
            mode: Mode::Improve,
            depth: DepthLevel::Standard,
            phase: None,
            original: text,
        };

        assert!(!RequireErrorHandling.apply(text, &ctx).unwrap().applied);
    }
}
