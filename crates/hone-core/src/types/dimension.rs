//! The six quality dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six orthogonal 0–100 axes describing prompt quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Clarity,
    Efficiency,
    Structure,
    Completeness,
    Actionability,
    Specificity,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Clarity,
        Dimension::Efficiency,
        Dimension::Structure,
        Dimension::Completeness,
        Dimension::Actionability,
        Dimension::Specificity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clarity => "clarity",
            Self::Efficiency => "efficiency",
            Self::Structure => "structure",
            Self::Completeness => "completeness",
            Self::Actionability => "actionability",
            Self::Specificity => "specificity",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
