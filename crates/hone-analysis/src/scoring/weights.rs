//! Per-intent dimension weight vectors.
//!
//! Eight predefined vectors (seven intent-specific plus the default),
//! each summing to 1.0. The values are hand-tuned and pinned by golden
//! tests; overrides never mutate these constants.

use hone_core::types::Intent;

/// Weights for the six quality dimensions, in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionWeights {
    pub clarity: f64,
    pub efficiency: f64,
    pub structure: f64,
    pub completeness: f64,
    pub actionability: f64,
    pub specificity: f64,
}

impl DimensionWeights {
    pub const DEFAULT: Self = Self {
        clarity: 0.20,
        efficiency: 0.10,
        structure: 0.15,
        completeness: 0.25,
        actionability: 0.15,
        specificity: 0.15,
    };

    pub const CODE_GENERATION: Self = Self {
        clarity: 0.15,
        efficiency: 0.10,
        structure: 0.15,
        completeness: 0.25,
        actionability: 0.15,
        specificity: 0.20,
    };

    pub const DEBUGGING: Self = Self {
        clarity: 0.15,
        efficiency: 0.05,
        structure: 0.10,
        completeness: 0.30,
        actionability: 0.15,
        specificity: 0.25,
    };

    pub const PLANNING: Self = Self {
        clarity: 0.20,
        efficiency: 0.05,
        structure: 0.25,
        completeness: 0.25,
        actionability: 0.15,
        specificity: 0.10,
    };

    pub const TESTING: Self = Self {
        clarity: 0.15,
        efficiency: 0.05,
        structure: 0.15,
        completeness: 0.30,
        actionability: 0.20,
        specificity: 0.15,
    };

    pub const SECURITY_REVIEW: Self = Self {
        clarity: 0.15,
        efficiency: 0.05,
        structure: 0.15,
        completeness: 0.30,
        actionability: 0.10,
        specificity: 0.25,
    };

    pub const REQUIREMENTS_GENERATION: Self = Self {
        clarity: 0.20,
        efficiency: 0.05,
        structure: 0.25,
        completeness: 0.30,
        actionability: 0.10,
        specificity: 0.10,
    };

    pub const SUMMARIZATION: Self = Self {
        clarity: 0.30,
        efficiency: 0.20,
        structure: 0.15,
        completeness: 0.10,
        actionability: 0.15,
        specificity: 0.10,
    };

    /// All predefined vectors, for validation.
    pub const ALL: [Self; 8] = [
        Self::DEFAULT,
        Self::CODE_GENERATION,
        Self::DEBUGGING,
        Self::PLANNING,
        Self::TESTING,
        Self::SECURITY_REVIEW,
        Self::REQUIREMENTS_GENERATION,
        Self::SUMMARIZATION,
    ];

    /// The vector for an intent. Intents without a specific vector use
    /// the default.
    pub fn for_intent(intent: Intent) -> &'static Self {
        match intent {
            Intent::CodeGeneration => &Self::CODE_GENERATION,
            Intent::Debugging => &Self::DEBUGGING,
            Intent::Planning => &Self::PLANNING,
            Intent::Testing => &Self::TESTING,
            Intent::SecurityReview => &Self::SECURITY_REVIEW,
            Intent::RequirementsGeneration => &Self::REQUIREMENTS_GENERATION,
            Intent::Summarization => &Self::SUMMARIZATION,
            _ => &Self::DEFAULT,
        }
    }

    pub fn sum(&self) -> f64 {
        self.clarity
            + self.efficiency
            + self.structure
            + self.completeness
            + self.actionability
            + self.specificity
    }

    /// Weighted overall score from the six dimension scores, rounded
    /// and clamped to [0, 100].
    pub fn overall(&self, scores: [u8; 6]) -> u8 {
        let [clarity, efficiency, structure, completeness, actionability, specificity] = scores;
        let weighted = self.clarity * clarity as f64
            + self.efficiency * efficiency as f64
            + self.structure * structure as f64
            + self.completeness * completeness as f64
            + self.actionability * actionability as f64
            + self.specificity * specificity as f64;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_vector_sums_to_one() {
        for weights in DimensionWeights::ALL {
            assert!(
                (weights.sum() - 1.0).abs() < 1e-6,
                "weight vector does not sum to 1.0: {weights:?}"
            );
        }
    }

    #[test]
    fn test_overall_of_uniform_scores() {
        for weights in DimensionWeights::ALL {
            assert_eq!(weights.overall([80; 6]), 80);
            assert_eq!(weights.overall([0; 6]), 0);
            assert_eq!(weights.overall([100; 6]), 100);
        }
    }

    /// Pins the hand-tuned values: they are preserved defaults, not
    /// derived, and must not drift silently.
    #[test]
    fn test_golden_weight_values() {
        assert_eq!(DimensionWeights::DEFAULT.clarity, 0.20);
        assert_eq!(DimensionWeights::DEFAULT.completeness, 0.25);
        assert_eq!(DimensionWeights::CODE_GENERATION.specificity, 0.20);
        assert_eq!(DimensionWeights::DEBUGGING.completeness, 0.30);
        assert_eq!(DimensionWeights::DEBUGGING.specificity, 0.25);
        assert_eq!(DimensionWeights::SUMMARIZATION.clarity, 0.30);
        assert_eq!(DimensionWeights::SUMMARIZATION.efficiency, 0.20);
    }

    #[test]
    fn test_intent_dispatch() {
        assert_eq!(
            DimensionWeights::for_intent(Intent::Debugging),
            &DimensionWeights::DEBUGGING
        );
        assert_eq!(
            DimensionWeights::for_intent(Intent::Learning),
            &DimensionWeights::DEFAULT
        );
    }
}
