//! The orchestrator's external contract types.

use serde::{Deserialize, Serialize};

use hone_core::errors::PipelineError;
use hone_core::types::{DepthLevel, Intent, IntentAnalysis, Mode, Phase};

use crate::patterns::{AppliedPattern, Improvement, RuleDiagnostic};
use crate::scoring::QualityMetrics;

/// Optional per-call overrides supplied by the surrounding workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextOverride {
    pub phase: Option<Phase>,
    pub document_type_hint: Option<String>,
    pub question_id: Option<String>,
    pub intent_override: Option<Intent>,
    pub depth_override: Option<DepthLevel>,
}

impl ContextOverride {
    /// Caller-contract validation. Violations are programming errors
    /// upstream and surface as hard errors, not recoveries.
    pub(crate) fn validate(&self) -> Result<(), PipelineError> {
        if let Some(id) = &self.question_id {
            if id.trim().is_empty() {
                return Err(PipelineError::InvalidContext(
                    "question_id must not be empty".to_string(),
                ));
            }
        }
        if let Some(hint) = &self.document_type_hint {
            if hint.trim().is_empty() {
                return Err(PipelineError::InvalidContext(
                    "document_type_hint must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// The result of one optimize call. Created fresh per call; no shared
/// mutable state across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub original: String,
    pub enhanced: String,
    pub intent: IntentAnalysis,
    pub quality: QualityMetrics,
    pub improvements: Vec<Improvement>,
    pub applied_patterns: Vec<AppliedPattern>,
    pub mode: Mode,
    pub depth_used: DepthLevel,
    pub processing_time_ms: u64,
    /// Per-rule failures from this pass. Fault-isolated, never fatal.
    pub diagnostics: Vec<RuleDiagnostic>,
}

/// Soft validation of an interview answer. Never blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerValidation {
    pub question_id: String,
    pub completeness: u8,
    pub specificity: u8,
    pub needs_clarification: bool,
    pub suggestion: Option<String>,
}
