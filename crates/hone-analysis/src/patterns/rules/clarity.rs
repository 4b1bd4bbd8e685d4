//! Clarity rules — vague wording, ambiguous pronouns, indirect openings.

use hone_core::errors::ApplyError;
use hone_core::types::{Dimension, Impact, Intent, PatternScope};

use crate::patterns::traits::RewriteRule;
use crate::patterns::types::{ApplyContext, Improvement, PatternOutcome};
use crate::text::{signals, TextFeatures};

/// Intents where rewriting the opening into a goal statement helps.
/// Learning and summarization prompts are legitimately interrogative.
const DIRECTIVE_INTENTS: &[Intent] = &[
    Intent::CodeGeneration,
    Intent::Debugging,
    Intent::Planning,
    Intent::Migration,
    Intent::Testing,
    Intent::SecurityReview,
    Intent::Documentation,
    Intent::Refinement,
    Intent::RequirementsGeneration,
];

pub struct ClarifyVagueTerms;

impl RewriteRule for ClarifyVagueTerms {
    fn id(&self) -> &'static str {
        "clarify-vague-terms"
    }
    fn name(&self) -> &'static str {
        "Clarify vague terms"
    }
    fn description(&self) -> &'static str {
        "Flags vague wording and asks for the concrete items meant"
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
        let hits = signals::vague_terms_in(text);
        if hits.is_empty() || text.contains("Clarify before starting:") {
            return Ok(PatternOutcome::unchanged(text));
        }

        let impact = if hits.len() >= 2 {
            Impact::Medium
        } else {
            Impact::Low
        };
        let list = hits.join(", ");
        let rewritten = format!(
            "{text}\n\nClarify before starting: replace vague wording ({list}) with the concrete items meant."
        );
        Ok(PatternOutcome::rewritten(
            rewritten,
            Improvement {
                dimension: Dimension::Clarity,
                description: format!("Flagged vague wording: {list}"),
                impact,
            },
        ))
    }
}

pub struct ResolveAmbiguousPronouns;

impl RewriteRule for ResolveAmbiguousPronouns {
    fn id(&self) -> &'static str {
        "resolve-ambiguous-pronouns"
    }
    fn name(&self) -> &'static str {
        "Resolve ambiguous pronouns"
    }
    fn description(&self) -> &'static str {
        "Asks short prompts to name what their pronouns refer to"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        5
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &Intent::ALL
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let features = TextFeatures::extract(text);
        let pronouns = signals::pronoun_count(text);
        if features.word_count >= 40 || pronouns < 2 || text.contains("Name the referents:") {
            return Ok(PatternOutcome::unchanged(text));
        }

        let rewritten = format!(
            "{text}\n\nName the referents: in a prompt this short, pronouns like \"it\" and \"this\" are ambiguous; spell out which component each one means."
        );
        Ok(PatternOutcome::rewritten(
            rewritten,
            Improvement {
                dimension: Dimension::Clarity,
                description: "Asked for pronoun referents in a short prompt".to_string(),
                impact: Impact::Low,
            },
        ))
    }
}

pub struct SharpenGoalStatement;

impl RewriteRule for SharpenGoalStatement {
    fn id(&self) -> &'static str {
        "sharpen-goal-statement"
    }
    fn name(&self) -> &'static str {
        "Sharpen goal statement"
    }
    fn description(&self) -> &'static str {
        "Rewrites an indirect opening into a direct goal statement"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        7
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        DIRECTIVE_INTENTS
    }
    fn excludes_with(&self) -> &'static [&'static str] {
        &["imperative-opening"]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let Some(opener) = signals::leading_indirect_opener(text) else {
            return Ok(PatternOutcome::unchanged(text));
        };

        let trimmed = text.trim_start();
        let rest = trimmed[opener.len()..]
            .trim_start_matches([',', ' '])
            .trim_start();
        if rest.is_empty() {
            return Ok(PatternOutcome::unchanged(text));
        }

        let mut chars = rest.chars();
        let rewritten = match chars.next() {
            Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
            None => return Ok(PatternOutcome::unchanged(text)),
        };

        Ok(PatternOutcome::rewritten(
            rewritten,
            Improvement {
                dimension: Dimension::Clarity,
                description: format!("Removed indirect opener \"{opener}\""),
                impact: Impact::Medium,
            },
        ))
    }
}
