//! Per-intent keyword and phrase tables, compiled once into a single
//! Aho-Corasick automaton.

use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, MatchKind};
use hone_core::types::Intent;

/// Score contribution of a single-keyword hit.
pub const KEYWORD_WEIGHT: u32 = 2;
/// Score contribution of a multi-word phrase hit.
pub const PHRASE_WEIGHT: u32 = 5;

/// Single keywords per intent.
const KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::CodeGeneration,
        &["build", "create", "implement", "develop", "generate", "feature", "component", "page", "form"],
    ),
    (
        Intent::Debugging,
        &["bug", "fix", "error", "crash", "broken", "fails", "failing", "exception", "debug"],
    ),
    (
        Intent::Planning,
        &["plan", "roadmap", "milestone", "milestones", "prioritize", "phases"],
    ),
    (
        Intent::Migration,
        &["migrate", "migrating", "upgrade", "port", "convert", "transition"],
    ),
    (
        Intent::Testing,
        &["test", "tests", "testing", "coverage", "regression", "e2e", "flaky"],
    ),
    (
        Intent::SecurityReview,
        &["security", "vulnerability", "vulnerabilities", "exploit", "injection", "xss", "csrf", "audit"],
    ),
    (
        Intent::Learning,
        &["explain", "understand", "learn", "difference", "tutorial"],
    ),
    (
        Intent::Documentation,
        &["document", "documentation", "readme", "docs", "docstring", "changelog"],
    ),
    (
        Intent::Refinement,
        &["refactor", "improve", "optimize", "simplify", "restructure", "cleanup"],
    ),
    (
        Intent::RequirementsGeneration,
        &["requirements", "prd", "specification", "scope", "stakeholders", "acceptance"],
    ),
    (
        Intent::Summarization,
        &["summarize", "summary", "tldr", "condense", "digest", "recap"],
    ),
];

/// Multi-word phrases per intent. Heavier than keywords.
const PHRASES: &[(Intent, &[&str])] = &[
    (
        Intent::CodeGeneration,
        &["create a", "build a", "implement a", "add a new", "write a function", "new feature"],
    ),
    (
        Intent::Debugging,
        &["not working", "doesn't work", "stack trace", "root cause", "throws an", "fix the"],
    ),
    (
        Intent::Planning,
        &["break down", "plan out", "steps to", "project plan", "high-level plan"],
    ),
    (
        Intent::Migration,
        &["migrate from", "upgrade to", "move from", "port to", "switch from"],
    ),
    (
        Intent::Testing,
        &["unit tests", "integration tests", "test coverage", "write tests", "end to end"],
    ),
    (
        Intent::SecurityReview,
        &["security review", "security audit", "sql injection", "threat model", "penetration test"],
    ),
    (
        Intent::Learning,
        &["how does", "what is", "explain how", "difference between", "help me understand"],
    ),
    (
        Intent::Documentation,
        &["write documentation", "api docs", "add comments", "update the readme", "usage guide"],
    ),
    (
        Intent::Refinement,
        &["clean up", "refactor the", "improve performance", "reduce duplication", "tech debt"],
    ),
    (
        Intent::RequirementsGeneration,
        &["product requirements", "acceptance criteria", "user stories", "functional requirements", "define the scope"],
    ),
    (
        Intent::Summarization,
        &["sum up", "key points", "short summary", "main takeaways"],
    ),
];

/// The compiled lexicon: one automaton per table (keywords and phrases
/// score independently, so a phrase hit never shadows the keyword
/// inside it), with parallel tables mapping patterns back to intents.
pub struct IntentLexicon {
    keywords: AhoCorasick,
    keyword_intents: Vec<usize>,
    phrases: AhoCorasick,
    phrase_intents: Vec<usize>,
}

impl IntentLexicon {
    fn build() -> Self {
        let (keywords, keyword_intents) = compile(KEYWORDS);
        let (phrases, phrase_intents) = compile(PHRASES);
        Self {
            keywords,
            keyword_intents,
            phrases,
            phrase_intents,
        }
    }

    pub fn global() -> &'static IntentLexicon {
        static LEXICON: OnceLock<IntentLexicon> = OnceLock::new();
        LEXICON.get_or_init(IntentLexicon::build)
    }

    /// Raw per-intent scores from word-bounded keyword/phrase hits,
    /// indexed in `Intent::ALL` order.
    pub fn scores(&self, text: &str) -> [u32; 11] {
        let mut scores = [0u32; 11];
        accumulate(&self.keywords, &self.keyword_intents, KEYWORD_WEIGHT, text, &mut scores);
        accumulate(&self.phrases, &self.phrase_intents, PHRASE_WEIGHT, text, &mut scores);
        scores
    }
}

fn compile(table: &[(Intent, &[&str])]) -> (AhoCorasick, Vec<usize>) {
    let mut terms: Vec<&str> = Vec::new();
    let mut intents: Vec<usize> = Vec::new();
    for (intent, words) in table {
        let idx = intent_index(*intent);
        for &w in *words {
            terms.push(w);
            intents.push(idx);
        }
    }
    let ac = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(&terms)
        .expect("intent lexicon automaton");
    (ac, intents)
}

fn accumulate(
    ac: &AhoCorasick,
    intents: &[usize],
    weight: u32,
    text: &str,
    scores: &mut [u32; 11],
) {
    let bytes = text.as_bytes();
    for m in ac.find_iter(text) {
        let before_ok = m.start() == 0 || !bytes[m.start() - 1].is_ascii_alphanumeric();
        let after_ok = m.end() == bytes.len() || !bytes[m.end()].is_ascii_alphanumeric();
        if before_ok && after_ok {
            scores[intents[m.pattern().as_usize()]] += weight;
        }
    }
}

pub(crate) fn intent_index(intent: Intent) -> usize {
    Intent::ALL
        .iter()
        .position(|i| *i == intent)
        .expect("intent in ALL")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_and_phrase_weights() {
        let lex = IntentLexicon::global();
        let scores = lex.scores("create a login page");
        // "create" (2) + "page" (2) + "create a" (5)
        assert_eq!(scores[intent_index(Intent::CodeGeneration)], 9);
    }

    #[test]
    fn test_word_bounded_keywords() {
        let lex = IntentLexicon::global();
        // "testing" must not additionally fire "test"
        let scores = lex.scores("testing");
        assert_eq!(scores[intent_index(Intent::Testing)], 2);
    }

    #[test]
    fn test_empty_scores() {
        let lex = IntentLexicon::global();
        assert_eq!(lex.scores(""), [0u32; 11]);
    }
}
