//! Sequential pattern application with per-rule fault isolation.

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use hone_core::errors::ApplyError;
use hone_core::types::{DepthLevel, IntentAnalysis, Mode, Phase};

use super::traits::RewriteRule;
use super::types::{AppliedPattern, ApplyContext, Improvement, RuleDiagnostic};

/// Everything one application pass produced.
#[derive(Debug, Clone, Default)]
pub struct ApplicationOutcome {
    /// The final rewritten text.
    pub text: String,
    pub improvements: Vec<Improvement>,
    pub applied_patterns: Vec<AppliedPattern>,
    /// Per-rule failures. A failing heuristic never aborts the pass.
    pub diagnostics: Vec<RuleDiagnostic>,
}

/// Run the ordered rules over the original text.
pub fn apply_all(
    rules: &[&dyn RewriteRule],
    original: &str,
    intent: &IntentAnalysis,
    mode: Mode,
    depth: DepthLevel,
    phase: Option<Phase>,
) -> ApplicationOutcome {
    let mut outcome = ApplicationOutcome {
        text: original.to_string(),
        ..Default::default()
    };

    for rule in rules {
        let ctx = ApplyContext {
            intent,
            mode,
            depth,
            phase,
            original,
        };

        let result = panic::catch_unwind(AssertUnwindSafe(|| rule.apply(&outcome.text, &ctx)));

        match result {
            Ok(Ok(pattern_outcome)) => {
                if pattern_outcome.applied {
                    debug!(pattern_id = rule.id(), "pattern applied");
                    outcome.text = pattern_outcome.text;
                    if let Some(improvement) = pattern_outcome.improvement {
                        outcome.improvements.push(improvement);
                    }
                    outcome.applied_patterns.push(AppliedPattern {
                        id: rule.id().to_string(),
                        name: rule.name().to_string(),
                    });
                }
            }
            Ok(Err(err)) => {
                outcome.diagnostics.push(RuleDiagnostic {
                    pattern_id: rule.id().to_string(),
                    message: err.to_string(),
                });
            }
            Err(payload) => {
                let err = ApplyError::Panicked {
                    id: rule.id().to_string(),
                    message: panic_message(payload.as_ref()),
                };
                outcome.diagnostics.push(RuleDiagnostic {
                    pattern_id: rule.id().to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    outcome
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::types::PatternOutcome;
    use hone_core::types::{Intent, PatternScope};

    struct AppendRule;

    impl RewriteRule for AppendRule {
        fn id(&self) -> &'static str {
            "append"
        }
        fn name(&self) -> &'static str {
            "Append"
        }
        fn description(&self) -> &'static str {
            "appends a marker"
        }
        fn scope(&self) -> PatternScope {
            PatternScope::Both
        }
        fn priority(&self) -> u8 {
            5
        }
        fn applicable_intents(&self) -> &'static [Intent] {
            &Intent::ALL
        }
        fn apply(
            &self,
            text: &str,
            _ctx: &ApplyContext,
        ) -> Result<PatternOutcome, ApplyError> {
            Ok(PatternOutcome {
                applied: true,
                text: format!("{text} [marked]"),
                improvement: None,
            })
        }
    }

    struct FailingRule;

    impl RewriteRule for FailingRule {
        fn id(&self) -> &'static str {
            "failing"
        }
        fn name(&self) -> &'static str {
            "Failing"
        }
        fn description(&self) -> &'static str {
            "always errors"
        }
        fn scope(&self) -> PatternScope {
            PatternScope::Both
        }
        fn priority(&self) -> u8 {
            5
        }
        fn applicable_intents(&self) -> &'static [Intent] {
            &Intent::ALL
        }
        fn apply(
            &self,
            _text: &str,
            _ctx: &ApplyContext,
        ) -> Result<PatternOutcome, ApplyError> {
            Err(ApplyError::Failed("boom".to_string()))
        }
    }

    struct PanickingRule;

    impl RewriteRule for PanickingRule {
        fn id(&self) -> &'static str {
            "panicking"
        }
        fn name(&self) -> &'static str {
            "Panicking"
        }
        fn description(&self) -> &'static str {
            "always panics"
        }
        fn scope(&self) -> PatternScope {
            PatternScope::Both
        }
        fn priority(&self) -> u8 {
            5
        }
        fn applicable_intents(&self) -> &'static [Intent] {
            &Intent::ALL
        }
        fn apply(
            &self,
            _text: &str,
            _ctx: &ApplyContext,
        ) -> Result<PatternOutcome, ApplyError> {
            panic!("heuristic exploded");
        }
    }

    fn run(rules: &[&dyn RewriteRule]) -> ApplicationOutcome {
        let intent = IntentAnalysis::fallback();
        apply_all(
            rules,
            "original text",
            &intent,
            Mode::Improve,
            DepthLevel::Standard,
            None,
        )
    }

    #[test]
    fn test_failing_rule_does_not_abort_pass() {
        let append = AppendRule;
        let failing = FailingRule;
        let outcome = run(&[&failing as &dyn RewriteRule, &append]);

        assert_eq!(outcome.text, "original text [marked]");
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].pattern_id, "failing");
        assert_eq!(outcome.applied_patterns.len(), 1);
    }

    #[test]
    fn test_panicking_rule_is_isolated() {
        let append = AppendRule;
        let panicking = PanickingRule;
        let outcome = run(&[&panicking as &dyn RewriteRule, &append]);

        assert_eq!(outcome.text, "original text [marked]");
        assert_eq!(outcome.diagnostics.len(), 1);
        assert!(outcome.diagnostics[0].message.contains("heuristic exploded"));
    }
}
