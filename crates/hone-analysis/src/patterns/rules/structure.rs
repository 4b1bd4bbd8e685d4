//! Structure rules — sectioning and enumeration layout.

use hone_core::errors::ApplyError;
use hone_core::types::{Dimension, Impact, Intent, PatternScope};

use crate::patterns::traits::RewriteRule;
use crate::patterns::types::{ApplyContext, Improvement, PatternOutcome};
use crate::text::features::first_sentence;
use crate::text::TextFeatures;

pub struct AddSectionHeaders;

impl RewriteRule for AddSectionHeaders {
    fn id(&self) -> &'static str {
        "add-section-headers"
    }
    fn name(&self) -> &'static str {
        "Add section headers"
    }
    fn description(&self) -> &'static str {
        "Splits a long unstructured prompt into objective and details sections"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        8
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &Intent::ALL
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let features = TextFeatures::extract(text);
        if features.word_count <= 80 || features.header_count > 0 {
            return Ok(PatternOutcome::unchanged(text));
        }

        let first = first_sentence(text);
        let rest = text[text.find(['.', '!', '?']).map_or(text.len(), |i| i + 1)..].trim();

        let rewritten = if rest.is_empty() {
            format!("## Objective\n{first}")
        } else {
            format!("## Objective\n{first}.\n\n## Details\n{rest}")
        };

        Ok(PatternOutcome::rewritten(
            rewritten,
            Improvement {
                dimension: Dimension::Structure,
                description: "Split a long prompt into objective and details sections"
                    .to_string(),
                impact: Impact::High,
            },
        ))
    }
}

pub struct BulletizeEnumerations;

impl RewriteRule for BulletizeEnumerations {
    fn id(&self) -> &'static str {
        "bulletize-enumerations"
    }
    fn name(&self) -> &'static str {
        "Bulletize enumerations"
    }
    fn description(&self) -> &'static str {
        "Lifts an inline comma enumeration into a checklist"
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
    fn run_after(&self) -> &'static [&'static str] {
        &["add-section-headers"]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let features = TextFeatures::extract(text);
        if features.bullet_count > 0 || text.contains("Items to address:") {
            return Ok(PatternOutcome::unchanged(text));
        }

        let Some(items) = find_enumeration(text) else {
            return Ok(PatternOutcome::unchanged(text));
        };

        let mut rewritten = format!("{text}\n\nItems to address:");
        for item in &items {
            rewritten.push_str("\n- ");
            rewritten.push_str(item);
        }

        Ok(PatternOutcome::rewritten(
            rewritten,
            Improvement {
                dimension: Dimension::Structure,
                description: format!("Lifted a {}-item enumeration into a checklist", items.len()),
                impact: Impact::Medium,
            },
        ))
    }
}

/// The first inline enumeration of three or more short comma-separated
/// items, if any.
fn find_enumeration(text: &str) -> Option<Vec<String>> {
    for sentence in text.split(['.', '!', '?']) {
        let parts: Vec<&str> = sentence.split(',').map(str::trim).collect();
        if parts.len() < 3 {
            continue;
        }
        let short_items = parts.iter().all(|p| {
            let words = p.split_whitespace().count();
            (1..=5).contains(&words)
        });
        if !short_items {
            continue;
        }
        return Some(
            parts
                .into_iter()
                .enumerate()
                .map(|(i, p)| {
                    // The first part carries the lead-in clause
                    // ("Support exports to csv") — keep its last token.
                    let item = if i == 0 {
                        p.rsplit(' ').next().unwrap_or(p)
                    } else {
                        p.strip_prefix("and ").unwrap_or(p)
                    };
                    item.trim().to_string()
                })
                .collect(),
        );
    }
    None
}
