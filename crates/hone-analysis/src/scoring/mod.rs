//! Quality scoring — six independent 0–100 dimensions and a per-intent
//! weighted overall score.

pub mod dimensions;
pub mod scorer;
pub mod weights;

pub use scorer::{QualityMetrics, QualityScorer};
pub use weights::DimensionWeights;
