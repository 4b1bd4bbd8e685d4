//! Pattern selection — filtering, exclusion resolution, and
//! dependency-respecting ordering.
//!
//! Pure function of (catalog state, intent, depth, phase): identical
//! inputs always yield the identical ordered list.

use tracing::warn;

use hone_core::types::collections::FxHashSet;
use hone_core::types::{DepthLevel, Intent, Phase};

use super::catalog::PatternCatalog;
use super::traits::RewriteRule;

/// Select and order the rules eligible for one optimization pass.
pub fn select<'c>(
    catalog: &'c PatternCatalog,
    intent: Intent,
    depth: DepthLevel,
    phase: Option<Phase>,
) -> Vec<&'c dyn RewriteRule> {
    // Steps 1–4: disabled, scope, intent, phase filters, in
    // registration order.
    let candidates: Vec<&dyn RewriteRule> = catalog
        .iter()
        .filter(|r| !catalog.is_disabled(r.id()))
        .filter(|r| r.scope().allows(depth))
        .filter(|r| r.applicable_intents().contains(&intent))
        .filter(|r| phase.map_or(true, |p| r.phases().contains(p)))
        .collect();

    // Step 5: exclusion resolution. Walk by effective priority
    // (descending), registration order as tie-break. A kept rule marks
    // its exclusions for the rest of the walk; rules already kept are
    // never removed.
    let mut walk = candidates;
    walk.sort_by(|a, b| {
        catalog
            .effective_priority(*b)
            .cmp(&catalog.effective_priority(*a))
            .then_with(|| {
                catalog
                    .registration_index(a.id())
                    .cmp(&catalog.registration_index(b.id()))
            })
    });

    let mut excluded: FxHashSet<&str> = FxHashSet::default();
    let mut kept: Vec<&dyn RewriteRule> = Vec::new();
    let mut kept_ids: FxHashSet<&str> = FxHashSet::default();
    for rule in walk {
        if excluded.contains(rule.id()) {
            continue;
        }
        for &ex in rule.excludes_with() {
            if !kept_ids.contains(ex) {
                excluded.insert(ex);
            }
        }
        kept_ids.insert(rule.id());
        kept.push(rule);
    }

    // Step 6: dependency ordering. Depth-first emit in priority order;
    // a rule's still-present `run_after` dependencies are emitted
    // first. A cycle is detected via the in-progress marker and the
    // back edge is dropped so ordering always terminates.
    order_by_dependencies(kept)
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Unvisited,
    Visiting,
    Done,
}

fn order_by_dependencies(kept: Vec<&dyn RewriteRule>) -> Vec<&dyn RewriteRule> {
    fn visit<'c>(
        pos: usize,
        kept: &[&'c dyn RewriteRule],
        by_id: &dyn Fn(&str) -> Option<usize>,
        states: &mut [VisitState],
        ordered: &mut Vec<&'c dyn RewriteRule>,
    ) {
        match states[pos] {
            VisitState::Done => return,
            VisitState::Visiting => {
                // Back edge: treat the dependency as already satisfied.
                warn!(
                    pattern_id = kept[pos].id(),
                    "dependency cycle among selected patterns; dropping back edge"
                );
                return;
            }
            VisitState::Unvisited => {}
        }
        states[pos] = VisitState::Visiting;
        for &dep in kept[pos].run_after() {
            if let Some(dep_pos) = by_id(dep) {
                visit(dep_pos, kept, by_id, states, ordered);
            }
        }
        states[pos] = VisitState::Done;
        ordered.push(kept[pos]);
    }

    let positions: Vec<(&str, usize)> =
        kept.iter().enumerate().map(|(i, r)| (r.id(), i)).collect();
    let by_id = |id: &str| -> Option<usize> {
        positions.iter().find(|(pid, _)| *pid == id).map(|(_, i)| *i)
    };

    let mut states = vec![VisitState::Unvisited; kept.len()];
    let mut ordered = Vec::with_capacity(kept.len());
    for pos in 0..kept.len() {
        visit(pos, &kept, &by_id, &mut states, &mut ordered);
    }
    ordered
}
