//! Workflow lifecycle phases.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of the surrounding workflow. Patterns can restrict
/// themselves to a subset of phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Discovery,
    Requirements,
    Architecture,
    Implementation,
    Verification,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Discovery,
        Phase::Requirements,
        Phase::Architecture,
        Phase::Implementation,
        Phase::Verification,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Requirements => "requirements",
            Self::Architecture => "architecture",
            Self::Implementation => "implementation",
            Self::Verification => "verification",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The phases a pattern participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSet {
    /// Applies in every phase (and when no phase is given).
    All,
    /// Applies only in the listed phases.
    Only(&'static [Phase]),
}

impl PhaseSet {
    pub fn contains(&self, phase: Phase) -> bool {
        match self {
            Self::All => true,
            Self::Only(phases) => phases.contains(&phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_set_membership() {
        assert!(PhaseSet::All.contains(Phase::Discovery));
        let only = PhaseSet::Only(&[Phase::Requirements, Phase::Verification]);
        assert!(only.contains(Phase::Requirements));
        assert!(!only.contains(Phase::Implementation));
    }
}
