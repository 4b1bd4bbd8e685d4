//! Intent classification vocabulary and per-call analysis result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What kind of work a prompt requests. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    /// Write new code or features.
    CodeGeneration,
    /// Diagnose and fix defective behavior.
    Debugging,
    /// Break down work, roadmaps, task sequencing.
    Planning,
    /// Move between versions, frameworks, or platforms.
    Migration,
    /// Write or improve automated tests.
    Testing,
    /// Audit code for vulnerabilities.
    SecurityReview,
    /// Explain a concept or teach an approach.
    Learning,
    /// Produce or update docs.
    Documentation,
    /// Improve existing code without changing behavior.
    Refinement,
    /// Turn an idea into concrete requirements.
    RequirementsGeneration,
    /// Condense existing material.
    Summarization,
}

impl Intent {
    /// All intents in declaration order.
    pub const ALL: [Intent; 11] = [
        Intent::CodeGeneration,
        Intent::Debugging,
        Intent::Planning,
        Intent::Migration,
        Intent::Testing,
        Intent::SecurityReview,
        Intent::Learning,
        Intent::Documentation,
        Intent::Refinement,
        Intent::RequirementsGeneration,
        Intent::Summarization,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CodeGeneration => "code-generation",
            Self::Debugging => "debugging",
            Self::Planning => "planning",
            Self::Migration => "migration",
            Self::Testing => "testing",
            Self::SecurityReview => "security-review",
            Self::Learning => "learning",
            Self::Documentation => "documentation",
            Self::Refinement => "refinement",
            Self::RequirementsGeneration => "requirements-generation",
            Self::Summarization => "summarization",
        }
    }

    /// Intents whose prompts routinely span multiple subsystems.
    /// Used by the escalation advisor's complex-intent factor.
    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            Self::Planning | Self::Migration | Self::SecurityReview
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .iter()
            .find(|i| i.name() == s)
            .copied()
            .ok_or(())
    }
}

/// Surface features of the prompt, derived from simple text checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCharacteristics {
    /// A fenced code block, inline code span, or file path is present.
    pub has_code_context: bool,
    /// Technical-dictionary terms are present.
    pub has_technical_terms: bool,
    /// The prompt asks rather than directs.
    pub is_open_ended: bool,
    /// Long enough to benefit from sections, but has none.
    pub needs_structure: bool,
}

/// Result of intent classification. Freshly computed per call; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub primary_intent: Intent,
    /// Normalized score, 0–100.
    pub confidence: u8,
    pub characteristics: PromptCharacteristics,
}

impl IntentAnalysis {
    /// The fallback analysis: most general intent, zero confidence,
    /// no characteristics. Returned for empty or unrecognizable input.
    pub fn fallback() -> Self {
        Self {
            primary_intent: Intent::CodeGeneration,
            confidence: 0,
            characteristics: PromptCharacteristics::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_name_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(Intent::from_str(intent.name()), Ok(intent));
        }
    }

    #[test]
    fn test_fallback_is_code_generation() {
        let fb = IntentAnalysis::fallback();
        assert_eq!(fb.primary_intent, Intent::CodeGeneration);
        assert_eq!(fb.confidence, 0);
        assert!(!fb.characteristics.has_code_context);
    }
}
