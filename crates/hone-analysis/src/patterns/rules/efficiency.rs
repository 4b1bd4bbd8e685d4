//! Efficiency rules — filler removal, duplicate sentences, whitespace.

use hone_core::errors::ApplyError;
use hone_core::types::{Dimension, Impact, Intent, PatternScope};

use crate::patterns::traits::RewriteRule;
use crate::patterns::types::{ApplyContext, Improvement, PatternOutcome};
use crate::text::signals;

pub struct StripFillerPhrases;

impl RewriteRule for StripFillerPhrases {
    fn id(&self) -> &'static str {
        "strip-filler-phrases"
    }
    fn name(&self) -> &'static str {
        "Strip filler phrases"
    }
    fn description(&self) -> &'static str {
        "Removes phrases that add length without information"
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
        let spans = signals::filler_spans(text);
        if spans.is_empty() {
            return Ok(PatternOutcome::unchanged(text));
        }

        let mut rewritten = String::with_capacity(text.len());
        let mut cursor = 0;
        for (start, end) in &spans {
            rewritten.push_str(&text[cursor..*start]);
            cursor = *end;
        }
        rewritten.push_str(&text[cursor..]);

        let rewritten = tidy_after_removal(&rewritten);
        if rewritten.is_empty() {
            return Err(ApplyError::InvalidOutput(
                "filler removal left no content".to_string(),
            ));
        }
        if rewritten == text {
            return Ok(PatternOutcome::unchanged(text));
        }

        let impact = if spans.len() >= 2 {
            Impact::Medium
        } else {
            Impact::Low
        };
        Ok(PatternOutcome::rewritten(
            rewritten,
            Improvement {
                dimension: Dimension::Efficiency,
                description: format!("Removed {} filler phrase(s)", spans.len()),
                impact,
            },
        ))
    }
}

/// Clean up the seams left by span removal: doubled spaces, a space
/// before punctuation, and stray leading whitespace.
fn tidy_after_removal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            if prev_space && (c == ',' || c == '.' || c == '?' || c == '!') {
                out.pop();
            }
            prev_space = false;
        }
        out.push(c);
    }
    let trimmed = out.trim_start();
    // Re-capitalize if the removed opener left a lowercase start.
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            format!("{}{}", first.to_uppercase(), chars.as_str())
        }
        _ => trimmed.to_string(),
    }
}

pub struct DeduplicateSentences;

impl RewriteRule for DeduplicateSentences {
    fn id(&self) -> &'static str {
        "deduplicate-sentences"
    }
    fn name(&self) -> &'static str {
        "Deduplicate sentences"
    }
    fn description(&self) -> &'static str {
        "Drops sentences repeated verbatim"
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
        let sentences = split_sentences(text);
        if sentences.len() < 2 {
            return Ok(PatternOutcome::unchanged(text));
        }

        let mut seen: Vec<String> = Vec::new();
        let mut kept: Vec<&str> = Vec::new();
        let mut dropped = 0usize;
        for sentence in &sentences {
            let key = normalize_sentence(sentence);
            if key.is_empty() || !seen.contains(&key) {
                seen.push(key);
                kept.push(sentence);
            } else {
                dropped += 1;
            }
        }

        if dropped == 0 {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            kept.concat().trim_end().to_string(),
            Improvement {
                dimension: Dimension::Efficiency,
                description: format!("Dropped {dropped} repeated sentence(s)"),
                impact: Impact::Low,
            },
        ))
    }
}

/// Split into sentence chunks, each retaining its terminator and
/// trailing whitespace so the kept chunks concatenate losslessly.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') {
            let mut end = i + 1;
            while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                end += 1;
            }
            chunks.push(&text[start..end]);
            start = end;
            i = end;
        } else {
            i += 1;
        }
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

fn normalize_sentence(sentence: &str) -> String {
    sentence
        .trim()
        .trim_end_matches(['.', '!', '?'])
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub struct CollapseWhitespace;

impl RewriteRule for CollapseWhitespace {
    fn id(&self) -> &'static str {
        "collapse-whitespace"
    }
    fn name(&self) -> &'static str {
        "Collapse whitespace"
    }
    fn description(&self) -> &'static str {
        "Normalizes blank-line runs and trailing spaces"
    }
    fn scope(&self) -> PatternScope {
        PatternScope::Both
    }
    fn priority(&self) -> u8 {
        2
    }
    fn applicable_intents(&self) -> &'static [Intent] {
        &Intent::ALL
    }
    fn run_after(&self) -> &'static [&'static str] {
        &["strip-filler-phrases", "deduplicate-sentences"]
    }

    fn apply(&self, text: &str, _ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError> {
        let mut lines: Vec<&str> = Vec::new();
        let mut blank_run = 0;
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 1 {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            lines.push(line);
        }

        let rewritten = lines.join("\n").trim().to_string();
        if rewritten == text {
            return Ok(PatternOutcome::unchanged(text));
        }

        Ok(PatternOutcome::rewritten(
            rewritten,
            Improvement {
                dimension: Dimension::Efficiency,
                description: "Normalized whitespace".to_string(),
                impact: Impact::Low,
            },
        ))
    }
}
