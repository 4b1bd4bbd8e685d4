//! The orchestrator — single public entry point composing the
//! classifier, catalog, selector, applicator, scorer, and advisor.

pub mod types;

use std::time::Instant;

use tracing::debug;

use hone_core::config::HoneConfig;
use hone_core::errors::PipelineError;
use hone_core::types::Mode;

use crate::escalation::{EscalationAdvisor, EscalationAnalysis};
use crate::intent::IntentClassifier;
use crate::patterns::{apply_all, select, CatalogStats, PatternCatalog};
use crate::scoring::{QualityMetrics, QualityScorer};

pub use types::{AnswerValidation, ContextOverride, OptimizationResult};

/// The prompt-intelligence pipeline. Immutable after construction, so
/// one instance can be shared across threads; every call is an
/// independent pure computation.
pub struct PromptOptimizer {
    catalog: PatternCatalog,
    classifier: IntentClassifier,
    scorer: QualityScorer,
    advisor: EscalationAdvisor,
    answer_floor: u8,
}

impl PromptOptimizer {
    /// Pipeline with the built-in catalog and default thresholds.
    pub fn new() -> Self {
        Self::with_config(&HoneConfig::default())
    }

    /// Pipeline configured from a validated `HoneConfig`. Pattern
    /// overrides are applied leniently; escalation thresholds are taken
    /// as given.
    pub fn with_config(config: &HoneConfig) -> Self {
        let mut catalog = PatternCatalog::builtin();
        catalog.apply_config(&config.patterns);
        Self {
            catalog,
            classifier: IntentClassifier::new(),
            scorer: QualityScorer::new(),
            advisor: EscalationAdvisor::new(config.escalation.clone()),
            answer_floor: config.escalation.effective_answer_floor(),
        }
    }

    /// Pipeline over a caller-assembled catalog (primarily for tests).
    pub fn with_catalog(catalog: PatternCatalog, config: &HoneConfig) -> Self {
        Self {
            catalog,
            classifier: IntentClassifier::new(),
            scorer: QualityScorer::new(),
            advisor: EscalationAdvisor::new(config.escalation.clone()),
            answer_floor: config.escalation.effective_answer_floor(),
        }
    }

    /// Analyze and rewrite one prompt.
    pub fn optimize(
        &self,
        text: &str,
        mode: Mode,
        context: Option<&ContextOverride>,
    ) -> Result<OptimizationResult, PipelineError> {
        let started = Instant::now();

        if let Some(ctx) = context {
            ctx.validate()?;
        }

        // (a) classify, or accept the caller's override
        let mut intent = self.classifier.classify(text);
        if let Some(forced) = context.and_then(|c| c.intent_override) {
            intent.primary_intent = forced;
            intent.confidence = 100;
        }

        // (b) resolve the effective depth
        let phase = context.and_then(|c| c.phase);
        let depth = context
            .and_then(|c| c.depth_override)
            .unwrap_or_else(|| mode.depth_for_phase(phase));

        // (c) select patterns
        let rules = select(&self.catalog, intent.primary_intent, depth, phase);
        debug!(
            intent = %intent.primary_intent,
            depth = %depth,
            rule_count = rules.len(),
            "patterns selected"
        );

        // (d) apply them in order
        let outcome = apply_all(&rules, text, &intent, mode, depth, phase);

        // (e) score the final text
        let mut quality = self.scorer.score(&outcome.text, &intent);
        quality.improvements = QualityScorer::describe_improvements(text, &outcome.text);

        // (f) assemble
        Ok(OptimizationResult {
            original: text.to_string(),
            enhanced: outcome.text,
            intent,
            quality,
            improvements: outcome.improvements,
            applied_patterns: outcome.applied_patterns,
            mode,
            depth_used: depth,
            processing_time_ms: started.elapsed().as_millis() as u64,
            diagnostics: outcome.diagnostics,
        })
    }

    /// Escalation triage for a prompt. Quality is computed on the text
    /// as written, never on a rewritten version.
    pub fn escalation_analysis(&self, text: &str) -> EscalationAnalysis {
        let intent = self.classifier.classify(text);
        let quality = self.scorer.score(text, &intent);
        self.advisor.analyze(&intent, &quality, text)
    }

    /// One-line human-readable summary of an escalation analysis.
    pub fn escalation_summary(analysis: &EscalationAnalysis) -> String {
        if analysis.should_escalate {
            let factors: Vec<&str> = analysis.reasons.iter().map(|r| r.factor).collect();
            format!(
                "Escalation recommended (score {}/100, {} confidence; factors: {}). {}",
                analysis.escalation_score,
                analysis.confidence,
                factors.join(", "),
                analysis.comprehensive_value,
            )
        } else {
            format!(
                "No escalation recommended (score {}/100). {}",
                analysis.escalation_score, analysis.comprehensive_value,
            )
        }
    }

    /// Soft validation of an interview answer: a suggestion is returned
    /// only when completeness or specificity falls below the configured
    /// floor. Never blocks the workflow.
    pub fn validate_answer(
        &self,
        answer: &str,
        question_id: &str,
    ) -> Result<AnswerValidation, PipelineError> {
        if question_id.trim().is_empty() {
            return Err(PipelineError::InvalidContext(
                "question_id must not be empty".to_string(),
            ));
        }

        let intent = self.classifier.classify(answer);
        let quality = self.scorer.score(answer, &intent);

        let needs_clarification =
            quality.completeness < self.answer_floor || quality.specificity < self.answer_floor;

        Ok(AnswerValidation {
            question_id: question_id.to_string(),
            completeness: quality.completeness,
            specificity: quality.specificity,
            needs_clarification,
            suggestion: needs_clarification.then(|| build_suggestion(&quality)),
        })
    }

    /// Pattern counts per scope, for session statistics.
    pub fn catalog_stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }
}

impl Default for PromptOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic clarification suggestion from the weak dimensions.
fn build_suggestion(quality: &QualityMetrics) -> String {
    let mut asks: Vec<&str> = Vec::new();
    if quality.completeness < quality.specificity {
        asks.push("what exists today and what should change");
        asks.push("concrete names, versions, or numbers");
    } else {
        asks.push("concrete names, versions, or numbers");
        asks.push("what exists today and what should change");
    }
    format!(
        "This answer is thin; consider adding {} and {}.",
        asks[0], asks[1]
    )
}
