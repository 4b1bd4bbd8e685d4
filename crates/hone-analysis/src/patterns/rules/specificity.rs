//! Specificity rules — measurable targets, named stacks, file lists.

use hone_core::errors::ApplyError;
use hone_core::types::{Dimension, Impact, Intent, PatternScope};

use crate::patterns::traits::RewriteRule;
use crate::patterns::types::{ApplyContext, Improvement, PatternOutcome};
use crate::text::{signals, TextFeatures};

pub struct QuantifyVagueQualifiers;

impl RewriteRule for QuantifyVagueQualifiers {
    fn id(&self) -> &'static str {
        "quantify-vague-qualifiers"
    }
    fn name(&self) -> &'static str {
        "Quantify vague qualifiers"
    }
    fn description(&self) -> &'static str {
        "Asks for measurable targets behind subjective qualifiers"
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
        let hits = signals::vague_qualifiers_in(text);
        if hits.is_empty() || text.contains("Quantify:") {
            return Ok(PatternOutcome::unchanged(text));
        }

        let impact = if hits.len() >= 2 {
            Impact::Medium
        } else {
            Impact::Low
        };
        let list = hits.join(", ");
        Ok(PatternOutcome::rewritten(
            format!(
                "{text}\n\nQuantify: replace subjective qualifiers ({list}) with measurable targets (latency, counts, sizes, or dates)."
            ),
            Improvement {
                dimension: Dimension::Specificity,
                description: format!("Flagged unquantified qualifiers: {list}"),
                impact,
            },
        ))
    }
}

pub struct NameTechnologies;

impl RewriteRule for NameTechnologies {
    fn id(&self) -> &'static str {
        "name-technologies"
    }
    fn name(&self) -> &'static str {
        "Name technologies"
    }
    fn description(&self) -> &'static str {
        "Asks for the concrete stack when no technology is named"
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
            Intent::Migration,
            Intent::Testing,
            Intent::SecurityReview,
        ]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        if signals::has_technical_terms(text) || text.contains("Name the stack:") {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            format!(
                "{text}\n\nName the stack: language and framework versions, runtime, and any libraries the solution must use."
            ),
            Improvement {
                dimension: Dimension::Specificity,
                description: "Asked for the concrete technology stack".to_string(),
                impact: Impact::Medium,
            },
        ))
    }
}

pub struct GroupFileReferences;

impl RewriteRule for GroupFileReferences {
    fn id(&self) -> &'static str {
        "group-file-references"
    }
    fn name(&self) -> &'static str {
        "Group file references"
    }
    fn description(&self) -> &'static str {
        "Collects scattered file paths into one list"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        4
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &Intent::ALL
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let features = TextFeatures::extract(text);
        if features.path_tokens.len() < 2 || text.contains("Files referenced:") {
            return Ok(PatternOutcome::unchanged(text));
        }

        let mut rewritten = format!("{text}\n\nFiles referenced:");
        for path in &features.path_tokens {
            rewritten.push_str("\n- ");
            rewritten.push_str(path);
        }

        Ok(PatternOutcome::rewritten(
            rewritten,
            Improvement {
                dimension: Dimension::Specificity,
                description: format!(
                    "Grouped {} file references into one list",
                    features.path_tokens.len()
                ),
                impact: Impact::Low,
            },
        ))
    }
}
