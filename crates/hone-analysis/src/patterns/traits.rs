//! The rewrite rule trait.

use hone_core::errors::ApplyError;
use hone_core::types::{Intent, PatternScope, PhaseSet};

use super::types::{ApplyContext, PatternOutcome};

/// One independent, composable rewrite heuristic.
///
/// Definitions are immutable after registration; anything tunable
/// (priority overrides, disabling) lives beside the catalog, not on the
/// rule. Implementations must be deterministic: identical input text
/// and context always produce an identical outcome.
pub trait RewriteRule: Send + Sync {
    /// Unique, stable id (kebab-case).
    fn id(&self) -> &'static str;

    /// Short human-readable name.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Which depth tiers this rule participates in.
    fn scope(&self) -> PatternScope;

    /// Declared priority, 1 (last resort) to 10 (always first).
    fn priority(&self) -> u8;

    /// Intents this rule is eligible for.
    fn applicable_intents(&self) -> &'static [Intent];

    /// Workflow phases this rule is eligible for.
    fn phases(&self) -> PhaseSet {
        PhaseSet::All
    }

    /// Ids that must be applied before this rule when both are selected.
    fn run_after(&self) -> &'static [&'static str] {
        &[]
    }

    /// Ids suppressed when this rule is selected with higher priority.
    fn excludes_with(&self) -> &'static [&'static str] {
        &[]
    }

    /// Apply the heuristic to the evolving text.
    fn apply(&self, text: &str, ctx: &ApplyContext) -> Result<PatternOutcome, ApplyError>;
}
