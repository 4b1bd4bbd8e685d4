//! Single-pass structural features of a prompt.

use std::sync::OnceLock;

use regex::Regex;

fn path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?x)
            [A-Za-z0-9_\-.]*/[A-Za-z0-9_\-./]+          # slash-separated path
            | \b[A-Za-z0-9_\-]+\.(?:rs|ts|tsx|js|jsx|py|go|java|kt|rb|php|cs|cpp|h|md|toml|yaml|yml|json|sql|sh|css|html)\b
            ",
        )
        .expect("path regex")
    })
}

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // snake_case with at least one underscore, or camelCase
        Regex::new(r"\b[a-z][a-z0-9]*(?:_[a-z0-9]+)+\b|\b[a-z]+(?:[A-Z][a-z0-9]+)+\b")
            .expect("identifier regex")
    })
}

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("numeric regex"))
}

/// Structural surface features of one text blob.
/// Extracted once per pipeline stage that needs them; pure and cheap.
#[derive(Debug, Clone, Default)]
pub struct TextFeatures {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub question_marks: usize,
    pub has_code_fence: bool,
    pub has_inline_code: bool,
    pub header_count: usize,
    pub bullet_count: usize,
    /// Path-like tokens in first-occurrence order, deduplicated.
    pub path_tokens: Vec<String>,
    pub identifier_count: usize,
    pub numeric_literals: usize,
}

impl TextFeatures {
    pub fn extract(text: &str) -> Self {
        let has_code_fence = text.contains("```");
        let backticks = text.matches('`').count();

        let mut header_count = 0;
        let mut bullet_count = 0;
        for line in text.lines() {
            let trimmed = line.trim_start();
            if trimmed.starts_with('#') {
                header_count += 1;
            } else if trimmed.starts_with("- ")
                || trimmed.starts_with("* ")
                || trimmed
                    .split_once(". ")
                    .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
            {
                bullet_count += 1;
            }
        }

        let mut path_tokens: Vec<String> = Vec::new();
        for m in path_re().find_iter(text) {
            let token = m.as_str().trim_end_matches(['.', ',']).to_string();
            if !path_tokens.contains(&token) {
                path_tokens.push(token);
            }
        }

        Self {
            char_count: text.chars().count(),
            word_count: text.split_whitespace().count(),
            sentence_count: count_sentences(text),
            question_marks: text.matches('?').count(),
            has_code_fence,
            // Fence delimiters account for backticks in pairs of three;
            // anything beyond them is an inline span.
            has_inline_code: !has_code_fence && backticks >= 2,
            header_count,
            bullet_count,
            path_tokens,
            identifier_count: identifier_re().find_iter(text).count(),
            numeric_literals: numeric_re().find_iter(text).count(),
        }
    }

    /// Question marks per sentence. 0.0 for empty text.
    pub fn question_density(&self) -> f64 {
        if self.sentence_count == 0 {
            return 0.0;
        }
        self.question_marks as f64 / self.sentence_count as f64
    }

    pub fn is_short(&self) -> bool {
        self.word_count < 20
    }
}

fn count_sentences(text: &str) -> usize {
    let count = text
        .split_terminator(['.', '!', '?'])
        .filter(|s| s.trim().len() > 1)
        .count();
    if count == 0 && !text.trim().is_empty() {
        1
    } else {
        count
    }
}

/// The first sentence of a text, or the whole text if it has no
/// sentence terminator.
pub fn first_sentence(text: &str) -> &str {
    match text.find(['.', '!', '?']) {
        Some(idx) => text[..idx].trim(),
        None => text.trim(),
    }
}
