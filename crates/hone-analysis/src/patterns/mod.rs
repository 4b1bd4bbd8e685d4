//! Rewrite pattern system — catalog, selection, ordered application,
//! and the built-in rule set.

pub mod applicator;
pub mod catalog;
pub mod rules;
pub mod selector;
pub mod traits;
pub mod types;

pub use applicator::{apply_all, ApplicationOutcome};
pub use catalog::{CatalogStats, PatternCatalog};
pub use selector::select;
pub use traits::RewriteRule;
pub use types::{AppliedPattern, ApplyContext, Improvement, PatternOutcome, RuleDiagnostic};
