//! Escalation triage — should this prompt be re-analyzed at the
//! comprehensive tier?

pub mod advisor;
pub mod factors;

pub use advisor::{EscalationAdvisor, EscalationAnalysis, EscalationConfidence};
pub use factors::EscalationReason;
