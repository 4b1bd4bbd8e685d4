//! The pattern catalog — insertion-ordered rule registry plus
//! externally supplied overrides.

use serde::{Deserialize, Serialize};
use tracing::warn;

use hone_core::config::PatternConfig;
use hone_core::errors::ConfigError;
use hone_core::types::collections::{FxHashMap, FxHashSet};
use hone_core::types::PatternScope;

use super::rules;
use super::traits::RewriteRule;

/// Pattern counts per scope, for session statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub standard: usize,
    pub comprehensive: usize,
    pub both: usize,
    pub disabled: usize,
}

/// Insertion-ordered registry of rewrite rules.
///
/// Rule definitions are registered once and never mutated; disabling and
/// priority overrides are side tables applied from configuration. The
/// registration order doubles as the deterministic tie-break everywhere
/// priorities compare equal.
pub struct PatternCatalog {
    rules: Vec<Box<dyn RewriteRule>>,
    index: FxHashMap<&'static str, usize>,
    disabled: FxHashSet<String>,
    priority_overrides: FxHashMap<String, u8>,
}

impl PatternCatalog {
    /// An empty catalog. Useful for tests composing their own rule set.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            index: FxHashMap::default(),
            disabled: FxHashSet::default(),
            priority_overrides: FxHashMap::default(),
        }
    }

    /// The full built-in rule set.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        rules::register_builtin(&mut catalog);
        catalog
    }

    /// Register a rule. Panics on a duplicate id or an out-of-range
    /// declared priority — both are programming errors in the rule set,
    /// not runtime conditions.
    pub fn register(&mut self, rule: Box<dyn RewriteRule>) {
        let id = rule.id();
        assert!(
            !self.index.contains_key(id),
            "duplicate pattern id: {id}"
        );
        assert!(
            (1..=10).contains(&rule.priority()),
            "pattern {id} declares priority {} outside 1..=10",
            rule.priority()
        );
        self.index.insert(id, self.rules.len());
        self.rules.push(rule);
    }

    /// Apply external overrides. Lenient: unknown ids and out-of-range
    /// priorities are logged and skipped, never fatal.
    pub fn apply_config(&mut self, config: &PatternConfig) {
        for id in &config.disabled {
            if self.index.contains_key(id.as_str()) {
                self.disabled.insert(id.clone());
            } else {
                warn!(pattern_id = %id, "ignoring disable for unknown pattern");
            }
        }
        for (id, priority) in &config.priority_overrides {
            if !self.index.contains_key(id.as_str()) {
                warn!(pattern_id = %id, "ignoring priority override for unknown pattern");
                continue;
            }
            if !(1..=10).contains(priority) {
                warn!(
                    pattern_id = %id,
                    priority = priority,
                    "ignoring out-of-range priority override"
                );
                continue;
            }
            self.priority_overrides.insert(id.clone(), *priority);
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn RewriteRule> + '_ {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn get(&self, id: &str) -> Option<&dyn RewriteRule> {
        self.index.get(id).map(|&i| self.rules[i].as_ref())
    }

    /// Position in registration order. The exclusion walk uses this as
    /// the tie-break for equal priorities.
    pub fn registration_index(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }

    /// Override if present, declared priority otherwise.
    pub fn effective_priority(&self, rule: &dyn RewriteRule) -> u8 {
        self.priority_overrides
            .get(rule.id())
            .copied()
            .unwrap_or_else(|| rule.priority())
    }

    /// Validate `run_after` edges across the whole catalog, reporting
    /// any cycle as a configuration-time error.
    ///
    /// The selector tolerates cycles at runtime (it drops the back edge
    /// to guarantee termination), but an operator should hear about the
    /// broken ordering guarantee up front.
    pub fn validate_dependencies(&self) -> Result<(), ConfigError> {
        #[derive(Clone, Copy, PartialEq)]
        enum State {
            Unvisited,
            Visiting,
            Done,
        }

        fn visit(
            catalog: &PatternCatalog,
            idx: usize,
            states: &mut [State],
            stack: &mut Vec<&'static str>,
        ) -> Result<(), ConfigError> {
            match states[idx] {
                State::Done => return Ok(()),
                State::Visiting => {
                    let mut chain: Vec<&str> = stack.clone();
                    chain.push(catalog.rules[idx].id());
                    return Err(ConfigError::DependencyCycle {
                        chain: chain.join(" -> "),
                    });
                }
                State::Unvisited => {}
            }
            states[idx] = State::Visiting;
            stack.push(catalog.rules[idx].id());
            for dep in catalog.rules[idx].run_after() {
                if let Some(&dep_idx) = catalog.index.get(dep) {
                    visit(catalog, dep_idx, states, stack)?;
                }
            }
            stack.pop();
            states[idx] = State::Done;
            Ok(())
        }

        let mut states = vec![State::Unvisited; self.rules.len()];
        let mut stack = Vec::new();
        for idx in 0..self.rules.len() {
            visit(self, idx, &mut states, &mut stack)?;
        }
        Ok(())
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total: self.rules.len(),
            standard: 0,
            comprehensive: 0,
            both: 0,
            disabled: self.disabled.len(),
        };
        for rule in &self.rules {
            match rule.scope() {
                PatternScope::Standard => stats.standard += 1,
                PatternScope::Comprehensive => stats.comprehensive += 1,
                PatternScope::Both => stats.both += 1,
            }
        }
        stats
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
