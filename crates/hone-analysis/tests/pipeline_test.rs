//! End-to-end orchestrator tests.

use hone_analysis::orchestrator::{ContextOverride, PromptOptimizer};
use hone_analysis::patterns::types::{ApplyContext, PatternOutcome};
use hone_analysis::patterns::{PatternCatalog, RewriteRule};
use hone_core::config::HoneConfig;
use hone_core::errors::{ApplyError, PipelineError};
use hone_core::types::{DepthLevel, Intent, Mode, PatternScope, Phase};

/// A prompt like "Create a login page" classifies as code generation,
/// grows through rewriting, and scores within bounds.
#[test]
fn test_improve_mode_basic_prompt() {
    let optimizer = PromptOptimizer::new();
    let result = optimizer
        .optimize("Create a login page", Mode::Improve, None)
        .unwrap();

    assert_eq!(result.intent.primary_intent, Intent::CodeGeneration);
    assert!(result.enhanced.len() > result.original.len());
    assert!(result.quality.overall <= 100);
    assert!(!result.applied_patterns.is_empty());
    assert_eq!(result.depth_used, DepthLevel::Standard);
    assert!(result.diagnostics.is_empty());
}

/// Empty input flows through the whole pipeline without panicking.
#[test]
fn test_empty_input_is_total() {
    let optimizer = PromptOptimizer::new();
    let result = optimizer.optimize("", Mode::Improve, None).unwrap();

    assert_eq!(result.intent.primary_intent, Intent::CodeGeneration);
    assert_eq!(result.intent.confidence, 0);
    assert!(!result.intent.characteristics.has_code_context);
    assert!(!result.intent.characteristics.is_open_ended);
    assert!(result.quality.overall <= 100);
}

/// Byte-identical results on repeated calls, `processing_time_ms`
/// aside.
#[test]
fn test_determinism() {
    let optimizer = PromptOptimizer::new();
    let text = "I want you to migrate the billing service from mysql to postgres, \
                it is slow and sort of brittle";

    let mut first = optimizer.optimize(text, Mode::Improve, None).unwrap();
    let mut second = optimizer.optimize(text, Mode::Improve, None).unwrap();
    first.processing_time_ms = 0;
    second.processing_time_ms = 0;

    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

/// The comprehensive tier applies rules the standard tier does not.
#[test]
fn test_depth_override_changes_selection() {
    let optimizer = PromptOptimizer::new();
    let text = "Audit the payment service for vulnerabilities";

    let standard = optimizer.optimize(text, Mode::Improve, None).unwrap();
    let deep = optimizer
        .optimize(
            text,
            Mode::Improve,
            Some(&ContextOverride {
                depth_override: Some(DepthLevel::Comprehensive),
                ..Default::default()
            }),
        )
        .unwrap();

    assert_eq!(standard.depth_used, DepthLevel::Standard);
    assert_eq!(deep.depth_used, DepthLevel::Comprehensive);
    assert!(deep
        .applied_patterns
        .iter()
        .any(|p| p.id == "add-security-checklist"));
    assert!(!standard
        .applied_patterns
        .iter()
        .any(|p| p.id == "add-security-checklist"));
}

/// Requirements mode runs its early interview phases at the
/// comprehensive tier.
#[test]
fn test_requirements_mode_phase_depth_mapping() {
    let optimizer = PromptOptimizer::new();
    let text = "Define the scope for the reporting module";

    let discovery = optimizer
        .optimize(
            text,
            Mode::Requirements,
            Some(&ContextOverride {
                phase: Some(Phase::Discovery),
                ..Default::default()
            }),
        )
        .unwrap();
    assert_eq!(discovery.depth_used, DepthLevel::Comprehensive);

    let implementation = optimizer
        .optimize(
            text,
            Mode::Requirements,
            Some(&ContextOverride {
                phase: Some(Phase::Implementation),
                ..Default::default()
            }),
        )
        .unwrap();
    assert_eq!(implementation.depth_used, DepthLevel::Standard);
}

/// An intent override skips classification.
#[test]
fn test_intent_override() {
    let optimizer = PromptOptimizer::new();
    let result = optimizer
        .optimize(
            "Create a login page",
            Mode::Improve,
            Some(&ContextOverride {
                intent_override: Some(Intent::SecurityReview),
                ..Default::default()
            }),
        )
        .unwrap();

    assert_eq!(result.intent.primary_intent, Intent::SecurityReview);
    assert_eq!(result.intent.confidence, 100);
}

/// Malformed context surfaces as a hard error at the boundary.
#[test]
fn test_malformed_context_rejected() {
    let optimizer = PromptOptimizer::new();
    let err = optimizer
        .optimize(
            "Create a login page",
            Mode::Improve,
            Some(&ContextOverride {
                question_id: Some("   ".to_string()),
                ..Default::default()
            }),
        )
        .unwrap_err();
    assert!(matches!(err, PipelineError::InvalidContext(_)));
}

/// A throwing rule is reported in diagnostics while the rest of the
/// pass completes.
#[test]
fn test_rule_failure_surfaces_as_diagnostic() {
    struct Broken;
    impl RewriteRule for Broken {
        fn id(&self) -> &'static str {
            "broken"
        }
        fn name(&self) -> &'static str {
            "Broken"
        }
        fn description(&self) -> &'static str {
            "always fails"
        }
        fn scope(&self) -> PatternScope {
            PatternScope::Both
        }
        fn priority(&self) -> u8 {
            10
        }
        fn applicable_intents(&self) -> &'static [Intent] {
            &Intent::ALL
        }
        fn apply(
            &self,
            _text: &str,
            _ctx: &ApplyContext,
        ) -> Result<PatternOutcome, ApplyError> {
            Err(ApplyError::Failed("synthetic failure".to_string()))
        }
    }

    let mut catalog = PatternCatalog::builtin();
    catalog.register(Box::new(Broken));
    let optimizer = PromptOptimizer::with_catalog(catalog, &HoneConfig::default());

    let result = optimizer
        .optimize("Create a login page", Mode::Improve, None)
        .unwrap();

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].pattern_id, "broken");
    assert!(result.diagnostics[0].message.contains("synthetic failure"));
    // The rest of the pass still ran.
    assert!(!result.applied_patterns.is_empty());
}

/// A degenerate answer gets a soft clarification suggestion.
#[test]
fn test_answer_validation_floor() {
    let optimizer = PromptOptimizer::new();
    let validation = optimizer.validate_answer("x", "q1").unwrap();

    assert_eq!(validation.question_id, "q1");
    assert!(validation.needs_clarification);
    assert!(validation.completeness < 50);
    let suggestion = validation.suggestion.unwrap();
    assert!(!suggestion.is_empty());
}

/// A substantive answer passes without a suggestion.
#[test]
fn test_answer_validation_passes_good_answer() {
    let optimizer = PromptOptimizer::new();
    let answer = "The service currently runs postgres 14 behind pgbouncer; we need the \
                  reporting queries moved to a read replica, keeping write latency under \
                  20ms, and the existing schema in db/schema.sql must not change.";
    let validation = optimizer.validate_answer(answer, "q2").unwrap();

    assert!(!validation.needs_clarification);
    assert!(validation.suggestion.is_none());
}

/// Empty question id is a caller-contract violation.
#[test]
fn test_answer_validation_rejects_empty_question_id() {
    let optimizer = PromptOptimizer::new();
    assert!(matches!(
        optimizer.validate_answer("fine answer", ""),
        Err(PipelineError::InvalidContext(_))
    ));
}

/// Escalation summaries are deterministic, readable strings.
#[test]
fn test_escalation_summary() {
    let optimizer = PromptOptimizer::new();

    let weak = optimizer.escalation_analysis("migrate the thing");
    assert!(weak.should_escalate);
    let summary = PromptOptimizer::escalation_summary(&weak);
    assert!(summary.starts_with("Escalation recommended"));
    assert!(summary.contains(&format!("score {}/100", weak.escalation_score)));

    let strong_prompt = optimizer.escalation_analysis(
        "Create a login page reusing the form components in src/components/forms, \
         covering error states, with acceptance criteria and unit tests for the \
         validation paths in auth/validate.ts",
    );
    let summary = PromptOptimizer::escalation_summary(&strong_prompt);
    if !strong_prompt.should_escalate {
        assert!(summary.starts_with("No escalation recommended"));
    }
}

/// Catalog statistics reflect the built-in rule set and config.
#[test]
fn test_catalog_stats() {
    let optimizer = PromptOptimizer::new();
    let stats = optimizer.catalog_stats();

    assert_eq!(stats.total, 23);
    assert_eq!(stats.comprehensive, 4);
    assert_eq!(stats.standard, 0);
    assert_eq!(stats.both, stats.total - stats.comprehensive);
    assert_eq!(stats.disabled, 0);

    let config = HoneConfig::from_toml(
        r#"
[patterns]
disabled = ["strip-filler-phrases"]
"#,
    )
    .unwrap();
    let configured = PromptOptimizer::with_config(&config);
    assert_eq!(configured.catalog_stats().disabled, 1);
}

/// Disabling a pattern removes its effect from the pipeline output.
#[test]
fn test_disabled_pattern_not_applied() {
    let text = "I was wondering if basically you could fix the login bug";

    let default_result = PromptOptimizer::new()
        .optimize(text, Mode::Improve, None)
        .unwrap();
    assert!(default_result
        .applied_patterns
        .iter()
        .any(|p| p.id == "strip-filler-phrases"));

    let config = HoneConfig::from_toml(
        r#"
[patterns]
disabled = ["strip-filler-phrases"]
"#,
    )
    .unwrap();
    let configured = PromptOptimizer::with_config(&config);
    let result = configured.optimize(text, Mode::Improve, None).unwrap();
    assert!(!result
        .applied_patterns
        .iter()
        .any(|p| p.id == "strip-filler-phrases"));
}
