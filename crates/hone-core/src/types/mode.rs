//! Modes, depth tiers, pattern scope, and improvement impact.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::phase::Phase;

/// Operating mode of the surrounding workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// One-shot prompt improvement.
    Improve,
    /// Requirements-interview workflow (PRD generation).
    Requirements,
    /// Lightweight conversational touch-up.
    Conversational,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Improve => "improve",
            Self::Requirements => "requirements",
            Self::Conversational => "conversational",
        }
    }

    /// Depth tier used when the caller does not override it.
    pub fn default_depth(&self) -> DepthLevel {
        DepthLevel::Standard
    }

    /// Mode-specific phase→depth mapping. Requirements mode runs its
    /// early interview phases at the comprehensive tier regardless of
    /// the mode default.
    pub fn depth_for_phase(&self, phase: Option<Phase>) -> DepthLevel {
        match (*self, phase) {
            (Self::Requirements, Some(Phase::Discovery))
            | (Self::Requirements, Some(Phase::Requirements)) => DepthLevel::Comprehensive,
            _ => self.default_depth(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Analysis thoroughness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepthLevel {
    Standard,
    Comprehensive,
}

impl DepthLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for DepthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which depth tiers a rewrite pattern participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternScope {
    Standard,
    Comprehensive,
    Both,
}

impl PatternScope {
    /// True if a pattern with this scope runs at the given depth.
    pub fn allows(&self, depth: DepthLevel) -> bool {
        match self {
            Self::Both => true,
            Self::Standard => depth == DepthLevel::Standard,
            Self::Comprehensive => depth == DepthLevel::Comprehensive,
        }
    }
}

/// How much a single applied pattern moved the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_allows() {
        assert!(PatternScope::Both.allows(DepthLevel::Standard));
        assert!(PatternScope::Both.allows(DepthLevel::Comprehensive));
        assert!(PatternScope::Standard.allows(DepthLevel::Standard));
        assert!(!PatternScope::Standard.allows(DepthLevel::Comprehensive));
        assert!(!PatternScope::Comprehensive.allows(DepthLevel::Standard));
    }

    #[test]
    fn test_requirements_mode_maps_early_phases_to_comprehensive() {
        let mode = Mode::Requirements;
        assert_eq!(
            mode.depth_for_phase(Some(Phase::Discovery)),
            DepthLevel::Comprehensive
        );
        assert_eq!(
            mode.depth_for_phase(Some(Phase::Implementation)),
            DepthLevel::Standard
        );
        assert_eq!(
            Mode::Improve.depth_for_phase(Some(Phase::Discovery)),
            DepthLevel::Standard
        );
    }
}
