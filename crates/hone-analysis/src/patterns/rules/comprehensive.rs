//! Comprehensive-tier rules — checklists only worth their length in a
//! deep analysis pass.

use hone_core::errors::ApplyError;
use hone_core::types::{Dimension, Impact, Intent, PatternScope, Phase, PhaseSet};

use crate::patterns::traits::RewriteRule;
use crate::patterns::types::{ApplyContext, Improvement, PatternOutcome};

fn append_checklist(
    text: &str,
    marker: &str,
    block: &str,
    description: &str,
) -> Result<PatternOutcome, ApplyError> {
    if text.contains(marker) {
        return Ok(PatternOutcome::unchanged(text));
    }
    Ok(PatternOutcome::rewritten(
        format!("{text}\n\n{block}"),
        Improvement {
            dimension: Dimension::Completeness,
            description: description.to_string(),
            impact: Impact::High,
        },
    ))
}

pub struct AddEdgeCaseChecklist;

impl RewriteRule for AddEdgeCaseChecklist {
    fn id(&self) -> &'static str {
        "add-edge-case-checklist"
    }
    fn name(&self) -> &'static str {
        "Add edge case checklist"
    }
    fn description(&self) -> &'static str {
        "Appends an edge-case checklist for deep analysis passes"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Comprehensive
    }
    fn priority(&self) -> u8 {
        6
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[
            Intent::CodeGeneration,
            Intent::Debugging,
            Intent::Refinement,
            Intent::Testing,
        ]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        append_checklist(
            text,
            "## Edge cases",
            "## Edge cases\n- Empty, oversized, and malformed input\n- Concurrent access and repeated invocation\n- Boundary values at limits and off-by-one positions",
            "Added an edge-case checklist",
        )
    }
}

pub struct AddSecurityChecklist;

impl RewriteRule for AddSecurityChecklist {
    fn id(&self) -> &'static str {
        "add-security-checklist"
    }
    fn name(&self) -> &'static str {
        "Add security checklist"
    }
    fn description(&self) -> &'static str {
        "Appends a security review checklist"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Comprehensive
    }
    fn priority(&self) -> u8 {
        7
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[Intent::SecurityReview, Intent::CodeGeneration]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        append_checklist(
            text,
            "## Security checklist",
            "## Security checklist\n- Input validation and output encoding\n- Authentication and authorization boundaries\n- Secrets handling and log hygiene\n- Dependency and supply-chain exposure",
            "Added a security checklist",
        )
    }
}

pub struct AddRollbackPlan;

impl RewriteRule for AddRollbackPlan {
    fn id(&self) -> &'static str {
        "add-rollback-plan"
    }
    fn name(&self) -> &'static str {
        "Add rollback plan"
    }
    fn description(&self) -> &'static str {
        "Appends a rollback plan skeleton to migration prompts"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Comprehensive
    }
    fn priority(&self) -> u8 {
        7
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[Intent::Migration]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        append_checklist(
            text,
            "## Rollback plan",
            "## Rollback plan\n- Snapshot or backup point before cutover\n- Verification gate that must pass before the old path is removed\n- Procedure to revert when the gate fails",
            "Added a rollback plan skeleton",
        )
    }
}

pub struct AddTestMatrix;

impl RewriteRule for AddTestMatrix {
    fn id(&self) -> &'static str {
        "add-test-matrix"
    }
    fn name(&self) -> &'static str {
        "Add test matrix"
    }
    fn description(&self) -> &'static str {
        "Appends a test matrix skeleton, superseding plain acceptance criteria"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Comprehensive
    }
    fn priority(&self) -> u8 {
        7
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &[Intent::Testing, Intent::CodeGeneration]
    }
    fn phases(&self) -> PhaseSet {
        PhaseSet::Only(&[Phase::Implementation, Phase::Verification])
    }
    fn excludes_with(&self) -> &'static [&'static str] {
        &["add-acceptance-criteria"]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        append_checklist(
            text,
            "## Test matrix",
            "## Test matrix\n| case | input | expected |\n|------|-------|----------|\n| happy path | | |\n| boundary values | | |\n| failure paths | | |",
            "Added a test matrix skeleton",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hone_core::types::{DepthLevel, IntentAnalysis, Mode};

    #[test]
    fn test_checklist_appended_once() {
        let intent = IntentAnalysis::fallback();
        let text = "Audit the payment service";
        let ctx = ApplyContext {
            intent: &intent,
            mode: Mode::Improve,
            depth: DepthLevel::Comprehensive,
            phase: None,
            original: text,
        };

        let out = AddSecurityChecklist.apply(text, &ctx).unwrap();
        assert!(out.applied);
        assert!(out.text.contains("## Security checklist"));

        let again = AddSecurityChecklist.apply(&out.text, &ctx).unwrap();
        assert!(!again.applied);
    }
}
