//! Pattern catalog overrides.

use serde::{Deserialize, Serialize};

use crate::types::collections::FxHashMap;

/// Externally supplied pattern overrides.
///
/// Applied once to the catalog at session start. Unknown pattern ids and
/// out-of-range priorities are skipped with a warning — they never fail
/// the session. Overrides live beside the catalog; registered pattern
/// definitions are immutable.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PatternConfig {
    /// Pattern ids excluded from selection.
    pub disabled: Vec<String>,
    /// Per-pattern priority overrides, each expected in 1..=10.
    pub priority_overrides: FxHashMap<String, u8>,
}

impl PatternConfig {
    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty() && self.priority_overrides.is_empty()
    }
}
