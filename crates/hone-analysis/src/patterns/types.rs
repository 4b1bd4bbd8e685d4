//! Value types flowing through the pattern pipeline.

use serde::{Deserialize, Serialize};

use hone_core::types::{DepthLevel, Dimension, Impact, IntentAnalysis, Mode, Phase};

/// Read-only context handed to every rule invocation.
#[derive(Debug, Clone, Copy)]
pub struct ApplyContext<'a> {
    pub intent: &'a IntentAnalysis,
    pub mode: Mode,
    pub depth: DepthLevel,
    pub phase: Option<Phase>,
    /// The prompt as the user wrote it, before any rewriting.
    pub original: &'a str,
}

/// One improvement recorded by an applied rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub dimension: Dimension,
    pub description: String,
    pub impact: Impact,
}

/// Result of a single rule invocation.
#[derive(Debug, Clone)]
pub struct PatternOutcome {
    pub applied: bool,
    pub text: String,
    pub improvement: Option<Improvement>,
}

impl PatternOutcome {
    /// The rule decided not to fire; the text passes through untouched.
    pub fn unchanged(text: &str) -> Self {
        Self {
            applied: false,
            text: text.to_string(),
            improvement: None,
        }
    }

    /// The rule rewrote the text.
    pub fn rewritten(text: String, improvement: Improvement) -> Self {
        Self {
            applied: true,
            text,
            improvement: Some(improvement),
        }
    }
}

/// Summary entry for a rule that fired, in application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedPattern {
    pub id: String,
    pub name: String,
}

/// A rule invocation that failed. Collected, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDiagnostic {
    pub pattern_id: String,
    pub message: String,
}
