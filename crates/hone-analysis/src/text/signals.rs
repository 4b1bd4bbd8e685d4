//! Anti-signal and concrete-detail term scans.
//!
//! One Aho-Corasick automaton per term list, built once and shared.
//! All scans are case-insensitive and word-bounded so "it" never fires
//! inside "commit".

use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, MatchKind};
use smallvec::SmallVec;

/// Vague nouns that hide what the prompt is actually about.
pub const VAGUE_TERMS: &[&str] = &[
    "stuff", "things", "something", "somehow", "whatever", "etc", "maybe", "possibly",
];

/// Subjective qualifiers with no measurable target.
pub const VAGUE_QUALIFIERS: &[&str] = &[
    "fast", "slow", "scalable", "efficient", "robust", "soon", "a few", "some", "many",
    "large", "small", "better", "nice",
];

/// Filler that adds length without information.
pub const FILLER_PHRASES: &[&str] = &[
    "please kindly", "i was wondering if", "if possible", "when you get a chance",
    "sort of", "kind of", "basically", "actually", "you know", "i guess",
];

/// Pronouns that are ambiguous without a nearby antecedent.
pub const AMBIGUOUS_PRONOUNS: &[&str] = &["it", "this", "that", "they", "them"];

/// Indirect request openers stripped by the goal-sharpening rule,
/// longest first so the automaton prefers the full phrase.
pub const INDIRECT_OPENERS: &[&str] = &[
    "i was wondering if you could",
    "i was wondering if",
    "i want you to",
    "i need you to",
    "i would like you to",
    "i would like",
    "i'd like you to",
    "i'd like",
    "i want",
    "i need",
    "can you",
    "could you",
    "would you",
    "please",
];

/// Verbs that make an opening imperative.
pub const IMPERATIVE_VERBS: &[&str] = &[
    "add", "audit", "build", "convert", "create", "debug", "delete", "describe", "design",
    "document", "explain", "fix", "generate", "implement", "investigate", "migrate",
    "optimize", "plan", "refactor", "remove", "rename", "review", "rewrite", "summarize",
    "test", "update", "upgrade", "write",
];

/// Function words ignored when measuring signal-to-noise.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "of", "to", "in", "on", "for", "with", "at",
    "by", "from", "as", "is", "are", "was", "were", "be", "been", "it", "this", "that",
    "these", "those", "i", "you", "we", "they", "my", "your", "our", "please", "would",
    "could", "should", "just", "really", "very", "some", "any",
];

/// Technical-term dictionary used for the has-technical-terms
/// characteristic and the specificity bonus.
pub const TECHNICAL_TERMS: &[&str] = &[
    "api", "async", "auth", "backend", "cache", "cd", "ci", "cli", "client", "cookie",
    "database", "deploy", "docker", "encryption", "endpoint", "frontend", "git", "graphql",
    "grpc", "hash", "http", "index", "javascript", "json", "jwt", "kafka", "kubernetes",
    "lambda", "latency", "login", "middleware", "migration", "mongodb", "mutex", "mysql",
    "node", "oauth", "orm", "postgres", "python", "queue", "react", "redis", "regex",
    "rest", "rust", "schema", "sdk", "server", "session", "sql", "ssl", "thread",
    "throughput", "timeout", "tls", "token", "toml", "typescript", "webhook", "websocket",
    "yaml",
];

fn automaton(terms: &[&str]) -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(terms)
        .expect("term automaton")
}

macro_rules! static_automaton {
    ($fn_name:ident, $terms:expr) => {
        fn $fn_name() -> &'static AhoCorasick {
            static AC: OnceLock<AhoCorasick> = OnceLock::new();
            AC.get_or_init(|| automaton($terms))
        }
    };
}

static_automaton!(vague_terms_ac, VAGUE_TERMS);
static_automaton!(vague_qualifiers_ac, VAGUE_QUALIFIERS);
static_automaton!(filler_ac, FILLER_PHRASES);
static_automaton!(pronouns_ac, AMBIGUOUS_PRONOUNS);
static_automaton!(technical_ac, TECHNICAL_TERMS);

/// True when the match at `[start, end)` falls on word boundaries.
fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

/// Word-bounded hits against a term list, deduplicated in
/// first-occurrence order.
fn bounded_hits(
    ac: &AhoCorasick,
    terms: &'static [&'static str],
    text: &str,
) -> SmallVec<[&'static str; 8]> {
    let mut hits: SmallVec<[&'static str; 8]> = SmallVec::new();
    for m in ac.find_iter(text) {
        if !word_bounded(text, m.start(), m.end()) {
            continue;
        }
        let term = terms[m.pattern().as_usize()];
        if !hits.contains(&term) {
            hits.push(term);
        }
    }
    hits
}

/// Total word-bounded match count (with repeats) against a term list.
fn bounded_count(ac: &AhoCorasick, text: &str) -> usize {
    ac.find_iter(text)
        .filter(|m| word_bounded(text, m.start(), m.end()))
        .count()
}

pub fn vague_terms_in(text: &str) -> SmallVec<[&'static str; 8]> {
    bounded_hits(vague_terms_ac(), VAGUE_TERMS, text)
}

pub fn vague_qualifiers_in(text: &str) -> SmallVec<[&'static str; 8]> {
    bounded_hits(vague_qualifiers_ac(), VAGUE_QUALIFIERS, text)
}

pub fn filler_phrases_in(text: &str) -> SmallVec<[&'static str; 8]> {
    bounded_hits(filler_ac(), FILLER_PHRASES, text)
}

pub fn filler_count(text: &str) -> usize {
    bounded_count(filler_ac(), text)
}

/// Byte spans of word-bounded filler phrases, in text order.
/// Used by the filler-stripping rule to cut the phrases out.
pub fn filler_spans(text: &str) -> Vec<(usize, usize)> {
    filler_ac()
        .find_iter(text)
        .filter(|m| word_bounded(text, m.start(), m.end()))
        .map(|m| (m.start(), m.end()))
        .collect()
}

pub fn pronoun_count(text: &str) -> usize {
    bounded_count(pronouns_ac(), text)
}

pub fn technical_term_count(text: &str) -> usize {
    bounded_count(technical_ac(), text)
}

pub fn has_technical_terms(text: &str) -> bool {
    technical_term_count(text) > 0
}

/// Share of words that carry content: longer than three characters and
/// not a stopword. 0.0 for empty text.
pub fn content_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut content = 0usize;
    for word in text.split_whitespace() {
        total += 1;
        let w: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        if w.len() > 3 && !STOPWORDS.contains(&w.as_str()) {
            content += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    content as f64 / total as f64
}

/// True when the first word of the text is an imperative verb.
pub fn starts_imperative(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .map(|w| {
            let w = w.trim_matches(|c: char| !c.is_ascii_alphabetic());
            IMPERATIVE_VERBS
                .iter()
                .any(|v| v.eq_ignore_ascii_case(w))
        })
        .unwrap_or(false)
}

/// The indirect opener the text starts with, if any.
/// Longest opener wins ("i want you to" before "i want").
pub fn leading_indirect_opener(text: &str) -> Option<&'static str> {
    let trimmed = text.trim_start();
    INDIRECT_OPENERS.iter().copied().find(|opener| {
        // `get` guards against a multibyte char straddling the prefix
        // boundary; a matched prefix is pure ASCII, so the tail slice
        // below it is always on a char boundary.
        trimmed
            .get(..opener.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(opener))
            && trimmed[opener.len()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_ascii_alphanumeric())
    })
}
