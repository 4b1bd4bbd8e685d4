//! The six dimension scoring functions.
//!
//! Each starts at 100, applies additive penalties for anti-signals and
//! additive bonuses for concrete-detail signals, and clamps to [0, 100].
//! The penalty and bonus values are hand-tuned; they are pinned by
//! golden tests rather than derived.

use hone_core::types::{Intent, IntentAnalysis};

use crate::text::features::first_sentence;
use crate::text::{signals, TextFeatures};

/// Intents whose prompts are expected to name concrete technology.
const TECHNICAL_INTENTS: &[Intent] = &[
    Intent::CodeGeneration,
    Intent::Debugging,
    Intent::Migration,
    Intent::Testing,
    Intent::SecurityReview,
    Intent::Refinement,
];

/// Keyword alternatives expected in a complete prompt, per intent, with
/// the penalty applied when none of the alternatives appear.
fn required_signals(intent: Intent) -> &'static [(&'static [&'static str], i32)] {
    match intent {
        Intent::CodeGeneration => &[
            (&["file", "path", "context", "existing"], 15),
            (&["error", "failure", "edge"], 10),
            (&["test", "verify", "validate", "acceptance", "check"], 10),
        ],
        Intent::Debugging => &[
            (&["reproduce", "reproduction", "steps"], 20),
            (&["expected", "actual"], 10),
            (&["version", "environment", "stack trace", "log"], 10),
        ],
        Intent::Planning => &[
            (&["constraint", "deadline", "scope"], 15),
            (&["milestone", "phase", "step"], 10),
        ],
        Intent::Migration => &[
            (&["rollback", "revert"], 15),
            (&["version"], 10),
        ],
        Intent::Testing => &[
            (&["coverage", "cases", "matrix"], 10),
            (&["framework", "runner"], 10),
        ],
        Intent::SecurityReview => &[
            (&["scope", "boundary", "threat"], 10),
            (&["auth"], 10),
        ],
        Intent::RequirementsGeneration => &[
            (&["user", "stakeholder"], 10),
            (&["acceptance", "criteria"], 15),
        ],
        _ => &[],
    }
}

pub fn score_clarity(text: &str, features: &TextFeatures, _intent: &IntentAnalysis) -> u8 {
    let mut score: i32 = 100;

    let vague = signals::vague_terms_in(text);
    score -= (vague.len() as i32 * 8).min(40);

    if features.word_count < 40 && signals::pronoun_count(text) >= 2 {
        score -= 12;
    }

    if first_sentence(text).split_whitespace().count() > 30 {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

pub fn score_efficiency(text: &str, features: &TextFeatures, _intent: &IntentAnalysis) -> u8 {
    let mut score: i32 = 100;

    score -= (signals::filler_count(text) as i32 * 5).min(30);

    if features.word_count > 0 {
        let ratio = signals::content_ratio(text);
        if ratio < 0.45 {
            score -= 20;
        } else if ratio < 0.60 {
            score -= 10;
        }
    }

    if has_duplicate_sentences(text) {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

pub fn score_structure(text: &str, features: &TextFeatures, _intent: &IntentAnalysis) -> u8 {
    let mut score: i32 = 100;

    if features.word_count > 80 && features.header_count == 0 {
        score -= 25;
    }
    if features.word_count > 40 && features.header_count == 0 && features.bullet_count == 0 {
        score -= 10;
    }
    if features.bullet_count == 0 && has_inline_enumeration(text) {
        score -= 10;
    }

    if features.header_count >= 2 {
        score += 10;
    }
    if features.bullet_count >= 1 {
        score += 5;
    }

    score.clamp(0, 100) as u8
}

pub fn score_completeness(text: &str, features: &TextFeatures, intent: &IntentAnalysis) -> u8 {
    let mut score: i32 = 100;

    if features.word_count < 5 {
        score -= 50;
    } else if features.word_count < 15 {
        score -= 25;
    } else if features.word_count < 30 {
        score -= 10;
    }

    let lower = text.to_lowercase();
    for (alternatives, penalty) in required_signals(intent.primary_intent) {
        if !alternatives.iter().any(|kw| lower.contains(kw)) {
            score -= penalty;
        }
    }

    if features.header_count >= 1 {
        score += 5;
    }

    score.clamp(0, 100) as u8
}

pub fn score_actionability(text: &str, features: &TextFeatures, intent: &IntentAnalysis) -> u8 {
    let mut score: i32 = 100;
    let lower = text.to_lowercase();

    if !signals::starts_imperative(text)
        && !lower.contains("task:")
        && !lower.contains("goal:")
    {
        score -= 15;
    }

    if intent.characteristics.is_open_ended {
        score -= 10;
    }

    let code_ish = matches!(
        intent.primary_intent,
        Intent::CodeGeneration | Intent::Debugging | Intent::Testing | Intent::Refinement
    );
    if code_ish
        && !["verify", "validate", "check", "test"]
            .iter()
            .any(|kw| lower.contains(kw))
    {
        score -= 10;
    }

    if ["format", "deliverable", "output"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        score += 8;
    }
    if features.numeric_literals > 0 {
        score += 5;
    }

    score.clamp(0, 100) as u8
}

pub fn score_specificity(text: &str, features: &TextFeatures, intent: &IntentAnalysis) -> u8 {
    let mut score: i32 = 100;

    let qualifiers = signals::vague_qualifiers_in(text);
    score -= (qualifiers.len() as i32 * 8).min(32);

    let tech_hits = signals::technical_term_count(text);
    let concrete = features.numeric_literals
        + features.path_tokens.len()
        + features.identifier_count
        + tech_hits;

    if features.word_count < 5 && concrete == 0 {
        score -= 40;
    }

    if TECHNICAL_INTENTS.contains(&intent.primary_intent) && tech_hits == 0 {
        score -= 15;
    }

    score += (features.numeric_literals as i32 * 4).min(12);
    score += (features.path_tokens.len() as i32 * 4).min(12);
    score += (tech_hits as i32 * 2).min(10);
    score += (features.identifier_count as i32 * 3).min(9);

    score.clamp(0, 100) as u8
}

fn has_duplicate_sentences(text: &str) -> bool {
    let mut seen: Vec<String> = Vec::new();
    for sentence in text.split(['.', '!', '?']) {
        let key = sentence
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if key.is_empty() {
            continue;
        }
        if seen.contains(&key) {
            return true;
        }
        seen.push(key);
    }
    false
}

fn has_inline_enumeration(text: &str) -> bool {
    text.split(['.', '!', '?'])
        .any(|sentence| sentence.matches(',').count() >= 3)
}
